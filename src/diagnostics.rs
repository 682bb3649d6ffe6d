use crate::probe::ProbeReport;
use crate::program::Program;
use colored::*;

/// One styled piece of a diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Plain(String),
    Bold(String),
    Good(String),
    Bad(String),
    Warn(String),
}

impl Token {
    /// Unstyled text of the token.
    pub fn text(&self) -> &str {
        match self {
            Token::Plain(s) | Token::Bold(s) | Token::Good(s) | Token::Bad(s) | Token::Warn(s) => s.as_str(),
        }
    }

    fn styled(&self) -> ColoredString {
        match self {
            Token::Plain(s) => s.normal(),
            Token::Bold(s) => s.bold(),
            Token::Good(s) => s.green(),
            Token::Bad(s) => s.red(),
            Token::Warn(s) => s.yellow(),
        }
    }
}

/// Receives diagnostic lines. Emission must not fail or block.
pub trait DiagnosticSink {
    fn emit(&self, tokens: &[Token]);
}

/// Prints lines with terminal colors, to stdout unless redirected.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink {
    quiet: bool,
    stderr: bool,
}

impl ConsoleSink {
    /// Sink writing to stdout; `quiet` drops every line.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            stderr: false,
        }
    }

    /// Keep stdout free for machine-readable output.
    pub fn to_stderr(mut self) -> Self {
        self.stderr = true;
        self
    }
}

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, tokens: &[Token]) {
        if self.quiet {
            return;
        }
        let line = tokens
            .iter()
            .map(|t| t.styled().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if self.stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// Join tokens without styling.
pub fn render_plain(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect::<Vec<_>>().join(" ")
}

/// The one-line summary written for every attempted resolution, e.g.
/// `Program guile (ice-9 format) found: YES (/usr/bin/guile) modules: ice-9 format`.
pub fn summary_line(interpreter: &Program, requested: &[String], report: &ProbeReport) -> Vec<Token> {
    let mut tokens = vec![
        Token::Plain("Program".into()),
        Token::Bold(interpreter.name().to_string()),
    ];
    if !requested.is_empty() {
        tokens.push(Token::Plain(format!("({})", requested.join(", "))));
    }
    tokens.push(Token::Plain("found:".into()));
    if interpreter.found() && report.is_complete() {
        tokens.push(Token::Good("YES".into()));
        tokens.push(Token::Plain(format!("({})", interpreter.display_command())));
    } else {
        tokens.push(Token::Bad("NO".into()));
    }
    if !report.found.is_empty() {
        tokens.push(Token::Plain("modules:".into()));
        tokens.push(Token::Plain(report.found.join(", ")));
    }
    tokens
}
