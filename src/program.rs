use serde::Serialize;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// A named executable and the command line used to invoke it.
///
/// An empty `command` means the program was not found. Values are built
/// once per resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    name: String,
    command: Vec<String>,
}

impl Program {
    /// Build a program from a metadata value.
    ///
    /// The value is trimmed and used as the whole command. Absent or blank
    /// values yield a program that is not found.
    pub fn from_command(name: impl Into<String>, value: Option<String>) -> Self {
        let command = match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => vec![v.to_string()],
            _ => Vec::new(),
        };
        Self {
            name: name.into(),
            command,
        }
    }

    /// A program that was looked for and not found.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: Vec::new(),
        }
    }

    /// Build a program from an explicit command line (program plus leading arguments).
    ///
    /// A blank first element means not found; the rest are kept as given.
    pub fn with_args(name: impl Into<String>, command: Vec<String>) -> Self {
        let command = match command.first() {
            Some(first) if !first.trim().is_empty() => command,
            _ => Vec::new(),
        };
        Self {
            name: name.into(),
            command,
        }
    }

    /// Logical name used in diagnostics and errors (`guile`, `guild`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Program path followed by its fixed leading arguments; empty when not found.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Whether the program has a usable command.
    pub fn found(&self) -> bool {
        !self.command.is_empty()
    }

    /// The command joined with single spaces, as shown in the summary line.
    pub fn display_command(&self) -> String {
        self.command.join(" ")
    }
}

/// How a metadata value is turned into a [`Program`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProgramLookup {
    /// Use the value as the command without touching the filesystem.
    #[default]
    Verbatim,
    /// Require the program to exist, searching `PATH` for bare names.
    SearchPath,
}

impl ProgramLookup {
    /// Turn a metadata value into a program according to this lookup mode.
    ///
    /// # Behavior
    /// - `Verbatim`: no filesystem access; any non-blank value is found.
    /// - `SearchPath`: the value must resolve to an executable; the
    ///   command becomes the resolved path.
    pub fn locate(&self, name: &str, value: Option<String>) -> Program {
        match self {
            ProgramLookup::Verbatim => Program::from_command(name, value),
            ProgramLookup::SearchPath => {
                Program::from_command(name, resolve_in(value, env::var_os("PATH")))
            }
        }
    }
}

/// Resolve `value` against `paths` (a `PATH`-style list).
///
/// Values with a path separator are checked as-is; bare names are
/// searched in `paths`. Blank or unresolvable values yield `None`.
fn resolve_in(value: Option<String>, paths: Option<OsString>) -> Option<String> {
    let value = value.filter(|v| !v.trim().is_empty())?;
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    which::which_in(value.trim(), paths, cwd)
        .ok()
        .map(|p| p.to_string_lossy().into_owned())
}
