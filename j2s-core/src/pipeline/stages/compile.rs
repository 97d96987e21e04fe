//! Compile stage - Java sources to class files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    CompileOutcome, DiagnosticLog, Error, InputTarget, Result, WorkspacePaths,
    manifest::{Manifest, build_manifest},
    paths::{compiled_dir_path, compiled_file_path},
    toolchain::{CompileRequest, Sources, Toolchain},
};

/// Output of a successful compile.
#[derive(Debug)]
pub struct CompiledArtifact {
    /// Class file (file mode) or class directory (directory mode).
    pub path: PathBuf,
    /// Everything the compiler printed.
    pub log: DiagnosticLog,
    /// Source list used in directory mode.
    pub manifest: Option<Manifest>,
}

/// Compile the input in the mode matching its shape.
pub fn compile(
    toolchain: &dyn Toolchain,
    target: &InputTarget,
    paths: &WorkspacePaths,
) -> Result<CompiledArtifact> {
    match target {
        InputTarget::SourceFile(file) => compile_file(toolchain, file),
        InputTarget::SourceDirectory(dir) => compile_directory(toolchain, dir, paths),
    }
}

/// Compile one source file; the class file lands next to it.
pub fn compile_file(toolchain: &dyn Toolchain, file: &Path) -> Result<CompiledArtifact> {
    let log = toolchain.compile(&CompileRequest {
        sources: Sources::File(file),
        output_dir: None,
    })?;
    let log = check_diagnostics(&InputTarget::SourceFile(file.to_path_buf()), log)?;

    Ok(CompiledArtifact {
        path: compiled_file_path(file),
        log,
        manifest: None,
    })
}

/// Compile every file under `dir` through a freshly written manifest.
///
/// Classes are written to `<dir>_compiled` next to `dir`.
pub fn compile_directory(
    toolchain: &dyn Toolchain,
    dir: &Path,
    paths: &WorkspacePaths,
) -> Result<CompiledArtifact> {
    let manifest = build_manifest(dir, &paths.manifest)?;
    let output_dir = compiled_dir_path(dir);

    let log = toolchain.compile(&CompileRequest {
        sources: Sources::Manifest(manifest.path()),
        output_dir: Some(&output_dir),
    })?;
    let log = check_diagnostics(&InputTarget::SourceDirectory(dir.to_path_buf()), log)?;

    Ok(CompiledArtifact {
        path: output_dir,
        log,
        manifest: Some(manifest),
    })
}

/// Fail the stage if the compiler log contains the error marker.
pub fn check_diagnostics(target: &InputTarget, log: DiagnosticLog) -> Result<DiagnosticLog> {
    match log.outcome() {
        CompileOutcome::Passed => {
            if !log.is_empty() {
                debug!("Compiler output:\n{}", log);
            }
            Ok(log)
        }
        CompileOutcome::Failed => Err(Box::new(Error::CompileFailed {
            name: target.display_name(),
            log,
        })),
    }
}
