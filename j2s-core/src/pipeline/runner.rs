//! Pipeline orchestrator.

use std::path::PathBuf;

use tracing::{debug, info, info_span};

use super::{
    PipelineState,
    stages::{compile, disassemble, package},
};
use crate::{
    CleanupReport, DiagnosticLog, InputTarget, Manifest, Result, WorkspacePaths, cleanup,
    toolchain::Toolchain,
};

/// The conversion pipeline.
///
/// Runs compile, package, disassemble and clean in order. A fatal error
/// in any stage is returned immediately and nothing after it runs,
/// cleanup included.
///
/// # Example
///
/// ```ignore
/// let report = Pipeline::new(&toolchain).optimize(true).run(&target)?;
/// ```
pub struct Pipeline<'a> {
    toolchain: &'a dyn Toolchain,
    optimize: bool,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct PipelineReport {
    pub target: InputTarget,
    pub paths: WorkspacePaths,
    /// Compiled artifact, removed again by cleanup.
    pub compiled: PathBuf,
    /// Compiler output of the passing compile.
    pub compile_log: DiagnosticLog,
    /// Source list, in directory mode.
    pub manifest: Option<Manifest>,
    /// Bundle path, removed again by cleanup.
    pub bundle: PathBuf,
    /// Disassembly output directory.
    pub output: PathBuf,
    pub cleanup: CleanupReport,
    pub state: PipelineState,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline that optimizes the bundle.
    pub fn new(toolchain: &'a dyn Toolchain) -> Self {
        Self {
            toolchain,
            optimize: true,
        }
    }

    /// Choose between the optimizing and non-optimizing packager profile.
    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    /// Run every stage on `target`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal stage error. Artifacts created up to that
    /// point are left on disk.
    pub fn run(&self, target: &InputTarget) -> Result<PipelineReport> {
        let span = info_span!("pipeline", input = %target.path().display());
        let _enter = span.enter();

        let paths = target.workspace();
        let mut state = PipelineState::Idle;

        advance(&mut state);
        info!("Compiling...");
        let compiled = guard(&mut state, compile(self.toolchain, target, &paths))?;

        advance(&mut state);
        info!("Packaging...");
        let bundle = guard(
            &mut state,
            package(self.toolchain, &compiled.path, &paths.bundle, self.optimize),
        )?;

        advance(&mut state);
        info!("Disassembling...");
        let output = guard(
            &mut state,
            disassemble(self.toolchain, &bundle, &paths.output),
        )?;

        advance(&mut state);
        info!("Cleaning...");
        let cleanup = cleanup::clean(&paths, &compiled.path);

        advance(&mut state);
        info!("Done.");

        Ok(PipelineReport {
            target: target.clone(),
            paths,
            compiled: compiled.path,
            compile_log: compiled.log,
            manifest: compiled.manifest,
            bundle,
            output,
            cleanup,
            state,
        })
    }
}

fn advance(state: &mut PipelineState) {
    if let Some(next) = state.next() {
        debug!(from = %state, to = %next, "Pipeline state");
        *state = next;
    }
}

fn guard<T>(state: &mut PipelineState, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        debug_assert!(state.can_abort());
        debug!(from = %state, error = %e, "Pipeline aborted");
        *state = PipelineState::Aborted;
    }
    result
}
