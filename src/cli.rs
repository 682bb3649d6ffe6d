use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line interface for guile-locate.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a Guile installation (interpreter + guild) through its dependency metadata
    Find {
        /// Dependency package name, e.g. guile-3.0
        package: String,

        /// Module that must import under the interpreter, e.g. "ice-9 format". Repeatable.
        #[arg(short, long = "module", value_name = "MODULE")]
        modules: Vec<String>,

        /// true | false | enabled | disabled | auto
        #[arg(long, default_value = "true")]
        required: String,

        /// Report a disabler instead of "not found" for optional lookups
        #[arg(long, default_value_t = false)]
        disabler: bool,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Config file (defaults to ./guile-locate.toml when present)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Require programs to exist, searching PATH for bare names
        #[arg(long, default_value_t = false)]
        search_path: bool,

        /// Verbose output about config and metadata sources
        #[arg(long, default_value_t = false)]
        debug: bool,

        /// Suppress the per-program summary line
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// Check which modules import under an explicit interpreter command
    Probe {
        /// Interpreter command and leading arguments
        #[arg(required = true, num_args = 1.., value_name = "COMMAND")]
        command: Vec<String>,

        /// Module to import. Repeatable.
        #[arg(short, long = "module", value_name = "MODULE", required = true)]
        modules: Vec<String>,
    },
}
