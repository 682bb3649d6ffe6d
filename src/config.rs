use crate::compat::Version;
use crate::metadata::StaticMetadata;
use crate::program::ProgramLookup;
use crate::resolver::VariableKeys;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "guile-locate.toml";

/// Contents of `guile-locate.toml`. Every section is optional.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LocateConfig {
    pub project: Option<ProjectInfo>,
    pub keys: Option<KeysConfig>,
    pub lookup: Option<LookupConfig>,

    /// Package metadata declared inline, checked before pkg-config.
    /// Each table maps variable names (`guile`, `guild`, ...) to values.
    #[serde(default)]
    pub packages: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProjectInfo {
    /// Oldest guile-locate release the project supports, used to warn
    /// about newer request options.
    pub min_version: Option<String>,
}

/// Overrides for the metadata variable names.
#[derive(Deserialize, Debug, Clone)]
pub struct KeysConfig {
    pub interpreter: Option<String>,
    pub compiler: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LookupConfig {
    /// Require programs to exist on disk, searching `PATH` for bare names.
    #[serde(default)]
    pub search_path: bool,

    /// pkg-config binary; `PKG_CONFIG` in the environment takes precedence.
    pub pkg_config: Option<String>,
}

impl LocateConfig {
    /// Variable keys with `[keys]` overrides applied; blank overrides are ignored.
    pub fn variable_keys(&self) -> VariableKeys {
        let mut keys = VariableKeys::default();
        if let Some(k) = &self.keys {
            if let Some(v) = k.interpreter.as_ref().filter(|v| !v.is_empty()) {
                keys.interpreter = v.clone();
            }
            if let Some(v) = k.compiler.as_ref().filter(|v| !v.is_empty()) {
                keys.compiler = v.clone();
            }
        }
        keys
    }

    /// `SearchPath` when `[lookup] search_path = true`, else `Verbatim`.
    pub fn program_lookup(&self) -> ProgramLookup {
        match &self.lookup {
            Some(l) if l.search_path => ProgramLookup::SearchPath,
            _ => ProgramLookup::Verbatim,
        }
    }

    /// pkg-config binary from `[lookup]`, if set.
    pub fn pkg_config(&self) -> Option<&str> {
        self.lookup.as_ref().and_then(|l| l.pkg_config.as_deref())
    }

    /// Parsed `project.min_version`.
    ///
    /// # Errors
    /// - The value is set but is not `major.minor[.patch]`.
    pub fn project_version(&self) -> Result<Option<Version>> {
        match self.project.as_ref().and_then(|p| p.min_version.as_deref()) {
            Some(v) => Ok(Some(v.parse::<Version>().context("Invalid 'project.min_version'")?)),
            None => Ok(None),
        }
    }

    /// The `[packages]` tables as a metadata source.
    pub fn static_metadata(&self) -> StaticMetadata {
        StaticMetadata::from(self.packages.clone())
    }
}

/// Load config from an explicit path, or from `guile-locate.toml` in the
/// current directory when present.
///
/// # Boundaries
/// - An explicit path that does not exist is an error.
/// - A missing default file yields an empty config.
/// - Files are expected to be small; read synchronously in one go.
pub fn load(explicit: Option<&Path>) -> Result<LocateConfig> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Configuration file '{}' not found.", p.display());
            }
            p
        }
        None => {
            let default = Path::new(CONFIG_FILE);
            if !default.exists() {
                return Ok(LocateConfig::default());
            }
            default
        }
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse config text.
pub fn parse(content: &str) -> Result<LocateConfig> {
    Ok(toml::from_str(content)?)
}
