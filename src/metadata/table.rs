use super::{Dependency, DependencyQuery};
use std::collections::BTreeMap;

/// Package metadata declared up front, typically in `guile-locate.toml`.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    packages: BTreeMap<String, BTreeMap<String, String>>,
}

impl StaticMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(
        mut self,
        package: impl Into<String>,
        variables: BTreeMap<String, String>,
    ) -> Self {
        self.packages.insert(package.into(), variables);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl From<BTreeMap<String, BTreeMap<String, String>>> for StaticMetadata {
    fn from(packages: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { packages }
    }
}

struct TableEntry<'a> {
    variables: &'a BTreeMap<String, String>,
}

impl Dependency for TableEntry<'_> {
    fn variable(&self, key: &str) -> Option<String> {
        self.variables.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

impl DependencyQuery for StaticMetadata {
    fn query(&self, package: &str) -> Option<Box<dyn Dependency + '_>> {
        self.packages
            .get(package)
            .map(|variables| Box::new(TableEntry { variables }) as Box<dyn Dependency + '_>)
    }

    fn describe(&self) -> String {
        "config file".to_string()
    }
}
