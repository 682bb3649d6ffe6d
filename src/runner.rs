use std::io;
use std::process::{Command, Stdio};

/// Runs a command line to completion and reports its exit code.
pub trait ProcessRunner {
    fn run(&self, argv: &[String]) -> io::Result<i32>;
}

/// Spawns real processes; output is discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> io::Result<i32> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command line"))?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        // Killed by a signal.
        Ok(output.status.code().unwrap_or(-1))
    }
}
