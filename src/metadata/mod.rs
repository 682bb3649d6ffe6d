pub mod pkgconfig;
pub mod table;

pub use pkgconfig::PkgConfig;
pub use table::StaticMetadata;

/// A located package and the string variables it exports.
pub trait Dependency {
    /// Value of a variable, `None` when unset or empty.
    fn variable(&self, key: &str) -> Option<String>;
}

/// Dependency metadata lookup.
///
/// Implementations decide where metadata comes from (pkg-config, a
/// config file); returning `None` means the package is not known.
pub trait DependencyQuery {
    fn query(&self, package: &str) -> Option<Box<dyn Dependency + '_>>;

    /// Short label used in debug output.
    fn describe(&self) -> String;
}

/// Tries each source in order; the first one that knows the package wins.
#[derive(Default)]
pub struct Layered {
    sources: Vec<Box<dyn DependencyQuery>>,
}

impl Layered {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, source: impl DependencyQuery + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl DependencyQuery for Layered {
    fn query(&self, package: &str) -> Option<Box<dyn Dependency + '_>> {
        self.sources.iter().find_map(|s| s.query(package))
    }

    fn describe(&self) -> String {
        self.sources
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
