use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use std::path::PathBuf;

use guile_locate::compat::FeatureGate;
use guile_locate::config;
use guile_locate::diagnostics::ConsoleSink;
use guile_locate::metadata::{DependencyQuery, Layered, PkgConfig};
use guile_locate::program::ProgramLookup;
use guile_locate::runner::SystemRunner;
use guile_locate::{
    find_installation, InstallationCache, Lookup, Requirement, ResolutionRequest, Resolver,
};

/// Parsed `find` arguments, passed through unvalidated.
pub struct FindOptions {
    pub package: String,
    pub modules: Vec<String>,
    pub required: String,
    pub disabler: bool,
    pub json: bool,
    pub config: Option<PathBuf>,
    pub search_path: bool,
    pub debug: bool,
    pub quiet: bool,
}

/// Resolve one package and report the outcome.
///
/// Flow:
/// 1. Load config (optional unless given explicitly)
/// 2. Validate the request
/// 3. Assemble metadata sources: config packages, then pkg-config
/// 4. Resolve and print
///
/// Returns the process exit code; optional lookups that find nothing
/// still exit 0.
pub fn execute_find_pipeline(opts: FindOptions) -> Result<i32> {
    // --- 1. Config ---
    let config = config::load(opts.config.as_deref())?;
    if opts.debug {
        let source = opts
            .config
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| config::CONFIG_FILE.to_string());
        eprintln!("{} Config: {}", "[DEBUG]".dimmed(), source);
    }

    // --- 2. Request ---
    let requirement: Requirement = opts.required.parse()?;
    let request = ResolutionRequest::builder(opts.package)
        .requirement(requirement)
        .disabler(opts.disabler)
        .modules(opts.modules)
        .build()
        .context("Invalid request")?;

    // --- 3. Collaborators ---
    let statics = config.static_metadata();
    let mut sources = Layered::new();
    if !statics.is_empty() {
        sources = sources.push(statics);
    }
    sources = sources.push(PkgConfig::from_env(config.pkg_config()));

    let lookup = if opts.search_path {
        ProgramLookup::SearchPath
    } else {
        config.program_lookup()
    };

    let keys = config.variable_keys();
    if opts.debug {
        eprintln!(
            "{} Metadata: {} | keys: {}/{} | lookup: {:?} | required: {}",
            "[DEBUG]".dimmed(),
            sources.describe(),
            keys.interpreter,
            keys.compiler,
            lookup,
            request.requirement()
        );
    }

    let sink = if opts.json {
        ConsoleSink::new(opts.quiet).to_stderr()
    } else {
        ConsoleSink::new(opts.quiet)
    };
    let runner = SystemRunner;
    let resolver = Resolver::new(&sources, &runner, &sink)
        .with_lookup(lookup)
        .with_gate(FeatureGate::new(config.project_version()?))
        .with_keys(keys);

    // --- 4. Resolve ---
    let mut cache = InstallationCache::new();
    let outcome = find_installation(&resolver, &mut cache, &request)?;

    if opts.json {
        let value = match &outcome {
            Lookup::Found(installation) => json!({ "found": true, "installation": installation }),
            Lookup::NotFound => json!({ "found": false }),
            Lookup::Disabler => json!({ "found": false, "disabler": true }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(0);
    }

    match outcome {
        Lookup::Found(installation) => {
            println!(
                "{} {} -> {} + {}",
                "[DONE]".green().bold(),
                request.package(),
                installation.interpreter().display_command(),
                installation.compiler().display_command()
            );
        }
        Lookup::NotFound => {
            println!("{} {} not found", "[INFO]".cyan(), request.package());
        }
        Lookup::Disabler => {
            println!(
                "{} {} not found, returning disabler",
                "[INFO]".cyan(),
                request.package()
            );
        }
    }

    Ok(0)
}
