use crate::error::RequestError;
use std::fmt;
use std::str::FromStr;

/// Tri-state build feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureState {
    Enabled,
    Disabled,
    Auto,
}

/// How strict a lookup is: a plain flag or a feature option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Bool(bool),
    Feature(FeatureState),
}

impl Requirement {
    /// Only `true` and `enabled` make a failed lookup an error.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Requirement::Bool(true) | Requirement::Feature(FeatureState::Enabled)
        )
    }

    /// True for `enabled`/`disabled`/`auto`, which older projects cannot use.
    pub fn is_feature(&self) -> bool {
        matches!(self, Requirement::Feature(_))
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Requirement::Bool(true)
    }
}

impl FromStr for Requirement {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Ok(Requirement::Bool(true)),
            "false" | "no" => Ok(Requirement::Bool(false)),
            "enabled" => Ok(Requirement::Feature(FeatureState::Enabled)),
            "disabled" => Ok(Requirement::Feature(FeatureState::Disabled)),
            "auto" => Ok(Requirement::Feature(FeatureState::Auto)),
            _ => Err(RequestError::InvalidRequirement(s.to_string())),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Requirement::Bool(true) => "true",
            Requirement::Bool(false) => "false",
            Requirement::Feature(FeatureState::Enabled) => "enabled",
            Requirement::Feature(FeatureState::Disabled) => "disabled",
            Requirement::Feature(FeatureState::Auto) => "auto",
        };
        f.write_str(s)
    }
}

/// A validated lookup request.
///
/// Construct through [`ResolutionRequest::new`] or [`RequestBuilder`]; the
/// resolver assumes every field has already been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    package: String,
    requirement: Requirement,
    disabler: bool,
    modules: Vec<String>,
}

impl ResolutionRequest {
    /// Required lookup of `package` with no modules and no disabler.
    pub fn new(package: impl Into<String>) -> Result<Self, RequestError> {
        RequestBuilder::new(package).build()
    }

    pub fn builder(package: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(package)
    }

    /// Dependency package name, trimmed.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Strictness resolved to a plain flag.
    pub fn required(&self) -> bool {
        self.requirement.is_required()
    }

    /// Whether an optional miss yields a disabler instead of not-found.
    pub fn disabler(&self) -> bool {
        self.disabler
    }

    /// Requested modules, trimmed and deduplicated in request order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }
}

/// Unchecked request input, as it arrives from the command line or config.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    package: String,
    requirement: Requirement,
    disabler: bool,
    modules: Vec<String>,
}

impl RequestBuilder {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            requirement: Requirement::default(),
            disabler: false,
            modules: Vec::new(),
        }
    }

    pub fn requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    pub fn required(self, required: bool) -> Self {
        self.requirement(Requirement::Bool(required))
    }

    pub fn disabler(mut self, disabler: bool) -> Self {
        self.disabler = disabler;
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.modules.push(module.into());
        self
    }

    /// Append modules; blanks and duplicates are handled by [`build`](Self::build).
    pub fn modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Check the package name and normalize the module list.
    ///
    /// Module names are trimmed and deduplicated, keeping the first
    /// occurrence so request order is preserved.
    pub fn build(self) -> Result<ResolutionRequest, RequestError> {
        let package = self.package.trim().to_string();
        if package.is_empty() {
            return Err(RequestError::EmptyPackage);
        }
        if package.chars().any(char::is_whitespace) {
            return Err(RequestError::InvalidPackage(package));
        }

        let mut modules: Vec<String> = Vec::with_capacity(self.modules.len());
        for (index, raw) in self.modules.iter().enumerate() {
            let module = raw.trim();
            if module.is_empty() {
                return Err(RequestError::EmptyModule { index });
            }
            if !modules.iter().any(|m| m == module) {
                modules.push(module.to_string());
            }
        }

        Ok(ResolutionRequest {
            package,
            requirement: self.requirement,
            disabler: self.disabler,
            modules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_requirement_values() {
        assert_eq!("true".parse::<Requirement>(), Ok(Requirement::Bool(true)));
        assert_eq!("No".parse::<Requirement>(), Ok(Requirement::Bool(false)));
        assert_eq!(
            " AUTO ".parse::<Requirement>(),
            Ok(Requirement::Feature(FeatureState::Auto))
        );
        assert_eq!(
            "maybe".parse::<Requirement>(),
            Err(RequestError::InvalidRequirement("maybe".into()))
        );
    }

    #[test]
    fn only_true_and_enabled_are_required() {
        assert!(Requirement::Bool(true).is_required());
        assert!(Requirement::Feature(FeatureState::Enabled).is_required());
        assert!(!Requirement::Bool(false).is_required());
        assert!(!Requirement::Feature(FeatureState::Auto).is_required());
        assert!(!Requirement::Feature(FeatureState::Disabled).is_required());
        assert!(ResolutionRequest::new("guile-3.0").unwrap().required());
    }

    #[test]
    fn requirement_display_round_trips() {
        for value in ["true", "false", "enabled", "disabled", "auto"] {
            let parsed: Requirement = value.parse().unwrap();
            assert_eq!(parsed.to_string(), value);
        }
    }

    #[test]
    fn rejects_bad_package_names() {
        assert_eq!(
            ResolutionRequest::new("  ").unwrap_err(),
            RequestError::EmptyPackage
        );
        assert_eq!(
            ResolutionRequest::new("guile 3.0").unwrap_err(),
            RequestError::InvalidPackage("guile 3.0".into())
        );
    }

    #[test]
    fn normalizes_modules_in_order() {
        let req = ResolutionRequest::builder("guile-3.0")
            .modules([" ice-9 format", "srfi srfi-1", "ice-9 format "])
            .module("web client")
            .build()
            .unwrap();
        assert_eq!(req.modules(), ["ice-9 format", "srfi srfi-1", "web client"]);
    }

    #[test]
    fn rejects_blank_module() {
        let err = ResolutionRequest::builder("guile-3.0")
            .modules(["ice-9 format", " "])
            .build()
            .unwrap_err();
        assert_eq!(err, RequestError::EmptyModule { index: 1 });
    }
}
