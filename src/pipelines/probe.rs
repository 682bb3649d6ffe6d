use anyhow::{Context, Result};
use colored::*;

use guile_locate::probe::probe_modules;
use guile_locate::program::Program;
use guile_locate::request::ResolutionRequest;
use guile_locate::runner::SystemRunner;

/// Import each module under `command` and list the results.
///
/// Exits 1 when any module is missing.
pub fn execute_probe_pipeline(command: Vec<String>, modules: Vec<String>) -> Result<i32> {
    let interpreter = Program::with_args("guile", command);
    if !interpreter.found() {
        anyhow::bail!("Interpreter command must not be empty");
    }

    // Reuse request validation for module name normalization.
    let modules = ResolutionRequest::builder("probe")
        .modules(modules)
        .build()
        .context("Invalid module list")?
        .modules()
        .to_vec();

    println!(
        "{} Probing {} module(s) with: {}",
        "[INFO]".cyan(),
        modules.len(),
        interpreter.display_command()
    );

    let report = probe_modules(&SystemRunner, &interpreter, &modules);
    for module in &report.found {
        println!("{} {}", "[OK]".green().bold(), module);
    }
    for module in &report.missing {
        println!("{} {}", "[MISSING]".red().bold(), module);
    }

    Ok(if report.is_complete() { 0 } else { 1 })
}
