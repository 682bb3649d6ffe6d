mod cli;
mod pipelines;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use colored::*;

/// Parse arguments, run the command, and print top-level errors without
/// a backtrace.
fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Dispatch the subcommand and return the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Find {
            package,
            modules,
            required,
            disabler,
            json,
            config,
            search_path,
            debug,
            quiet,
        } => pipelines::execute_find_pipeline(pipelines::FindOptions {
            package,
            modules,
            required,
            disabler,
            json,
            config,
            search_path,
            debug,
            quiet,
        }),
        Commands::Probe { command, modules } => pipelines::execute_probe_pipeline(command, modules),
    }
}
