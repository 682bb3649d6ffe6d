//! Locate a Guile interpreter and its `guild` compiler through dependency
//! metadata, and verify that requested modules import under it.

pub mod cache;
pub mod compat;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod metadata;
pub mod probe;
pub mod program;
pub mod request;
pub mod resolver;
pub mod runner;

pub use cache::{find_installation, InstallationCache, Lookup};
pub use error::{RequestError, ResolveError};
pub use request::{FeatureState, Requirement, ResolutionRequest};
pub use resolver::{Installation, Resolver, VariableKeys};
