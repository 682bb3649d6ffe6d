use crate::compat::FeatureGate;
use crate::diagnostics::{summary_line, DiagnosticSink};
use crate::error::ResolveError;
use crate::metadata::DependencyQuery;
use crate::probe::{probe_modules, ProbeReport};
use crate::program::{Program, ProgramLookup};
use crate::request::ResolutionRequest;
use crate::runner::ProcessRunner;
use serde::Serialize;

pub const INTERPRETER_NAME: &str = "guile";
pub const COMPILER_NAME: &str = "guild";

/// Metadata variables naming the interpreter and compiler executables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableKeys {
    pub interpreter: String,
    pub compiler: String,
}

impl Default for VariableKeys {
    fn default() -> Self {
        Self {
            interpreter: INTERPRETER_NAME.to_string(),
            compiler: COMPILER_NAME.to_string(),
        }
    }
}

/// A usable interpreter/compiler pair and the modules verified under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Installation {
    interpreter: Program,
    compiler: Program,
    modules: Vec<String>,
}

impl Installation {
    /// The `guile` interpreter.
    pub fn interpreter(&self) -> &Program {
        &self.interpreter
    }

    /// The `guild` bytecode compiler.
    pub fn compiler(&self) -> &Program {
        &self.compiler
    }

    /// Modules that were requested and import successfully.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Whether every module in `modules` was verified for this installation.
    pub fn provides(&self, modules: &[String]) -> bool {
        modules.iter().all(|m| self.modules.contains(m))
    }
}

/// Resolves a package name into an [`Installation`].
///
/// Holds only borrowed collaborators, so one resolver can serve any number
/// of calls without carrying state between them.
pub struct Resolver<'a> {
    query: &'a dyn DependencyQuery,
    runner: &'a dyn ProcessRunner,
    sink: &'a dyn DiagnosticSink,
    lookup: ProgramLookup,
    gate: FeatureGate,
    keys: VariableKeys,
}

impl<'a> Resolver<'a> {
    /// Resolver with verbatim program lookup, no compat warnings and the
    /// default `guile`/`guild` variable keys.
    pub fn new(
        query: &'a dyn DependencyQuery,
        runner: &'a dyn ProcessRunner,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            query,
            runner,
            sink,
            lookup: ProgramLookup::default(),
            gate: FeatureGate::default(),
            keys: VariableKeys::default(),
        }
    }

    /// How metadata values become programs.
    pub fn with_lookup(mut self, lookup: ProgramLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Project compatibility settings for the feature-option warning.
    pub fn with_gate(mut self, gate: FeatureGate) -> Self {
        self.gate = gate;
        self
    }

    /// Metadata variable names to read.
    pub fn with_keys(mut self, keys: VariableKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Run the lookup pipeline for one request.
    ///
    /// Flow:
    /// 1. Feature-option compatibility warning
    /// 2. Metadata query
    /// 3. Interpreter and compiler from metadata variables
    /// 4. Module probe (only with a found interpreter and requested modules)
    /// 5. Summary line
    /// 6. Verdict: interpreter, then modules, then compiler
    ///
    /// # Boundaries
    /// - `Ok(None)` means "not found" for a request that was not required.
    /// - The summary line is emitted once the metadata is found, before the
    ///   verdict, so failed attempts are visible too.
    pub fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<Option<Installation>, ResolveError> {
        self.gate.check(&request.requirement(), self.sink);
        let required = request.required();

        let Some(dependency) = self.query.query(request.package()) else {
            if required {
                return Err(ResolveError::DependencyNotFound {
                    package: request.package().to_string(),
                });
            }
            return Ok(None);
        };

        let interpreter = self
            .lookup
            .locate(INTERPRETER_NAME, dependency.variable(&self.keys.interpreter));
        let compiler = self
            .lookup
            .locate(COMPILER_NAME, dependency.variable(&self.keys.compiler));

        let report = if interpreter.found() && !request.modules().is_empty() {
            probe_modules(self.runner, &interpreter, request.modules())
        } else {
            ProbeReport::default()
        };

        self.sink
            .emit(&summary_line(&interpreter, request.modules(), &report));

        if !interpreter.found() {
            if required {
                return Err(ResolveError::InterpreterNotFound {
                    name: interpreter.name().to_string(),
                });
            }
            return Ok(None);
        }
        if !report.missing.is_empty() {
            if required {
                return Err(ResolveError::MissingModules {
                    name: interpreter.name().to_string(),
                    missing: report.missing,
                });
            }
            return Ok(None);
        }
        if !compiler.found() {
            if required {
                return Err(ResolveError::CompilerNotFound {
                    name: compiler.name().to_string(),
                });
            }
            return Ok(None);
        }

        Ok(Some(Installation {
            interpreter,
            compiler,
            modules: report.found,
        }))
    }
}
