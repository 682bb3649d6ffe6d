use crate::program::Program;
use crate::runner::ProcessRunner;

/// Outcome of probing modules under one interpreter.
///
/// Both lists keep the order the modules were requested in, and every
/// requested module lands in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl ProbeReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Arguments appended to the interpreter command to import `module`.
pub fn import_args(module: &str) -> [String; 2] {
    ["-c".to_string(), format!("(use-modules ({module}))")]
}

/// Import each module in its own interpreter process.
///
/// A spawn failure counts as a missing module. Nothing is spawned when
/// `modules` is empty or the interpreter was not found.
pub fn probe_modules(
    runner: &dyn ProcessRunner,
    interpreter: &Program,
    modules: &[String],
) -> ProbeReport {
    let mut report = ProbeReport::default();
    if modules.is_empty() {
        return report;
    }
    if !interpreter.found() {
        report.missing = modules.to_vec();
        return report;
    }

    for module in modules {
        let mut argv = interpreter.command().to_vec();
        argv.extend(import_args(module));

        match runner.run(&argv) {
            Ok(0) => report.found.push(module.clone()),
            Ok(_) | Err(_) => report.missing.push(module.clone()),
        }
    }

    report
}
