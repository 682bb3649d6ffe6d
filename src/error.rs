use thiserror::Error;

/// Failures of a single resolution call.
///
/// Each variant only surfaces when the caller marked the lookup as
/// required; otherwise the same condition is reported as an absent result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The metadata source does not know the package.
    #[error("{package} not found")]
    DependencyNotFound { package: String },

    /// Metadata exists but names no usable interpreter.
    #[error("{name} not found")]
    InterpreterNotFound { name: String },

    /// The interpreter runs but some requested modules do not import.
    #[error("{name} is missing modules: {}", .missing.join(", "))]
    MissingModules { name: String, missing: Vec<String> },

    /// Interpreter and modules are fine, the compiler is not.
    #[error("{name} not found")]
    CompilerNotFound { name: String },
}

/// Rejected caller input, raised before any lookup happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("package name must not be empty")]
    EmptyPackage,

    #[error("package name contains whitespace: '{0}'")]
    InvalidPackage(String),

    #[error("module name at position {index} is empty")]
    EmptyModule { index: usize },

    #[error("invalid value for 'required': '{0}' (expected true, false, enabled, disabled or auto)")]
    InvalidRequirement(String),

    #[error("invalid version string: '{0}'")]
    InvalidVersion(String),
}
