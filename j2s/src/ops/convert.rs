//! Convert operation - run the full pipeline on one input.

use java2smali_config::Config;
use java2smali_core::{InputTarget, Pipeline, ProcessToolchain, Result};
use tracing::trace;

use crate::reports::ConvertReport;

/// Options for the convert operation.
pub struct ConvertOptions {
    /// Whether the packager may optimize the bundle.
    pub optimize: bool,
}

/// Execute the convert operation.
///
/// Builds the process toolchain from the configuration and runs the
/// pipeline on the target.
pub fn convert(config: &Config, target: &InputTarget, opts: ConvertOptions) -> Result<ConvertReport> {
    let toolchain = ProcessToolchain::new(&config.toolchain);
    let report = Pipeline::new(&toolchain)
        .optimize(opts.optimize)
        .run(target)?;

    let mut warnings: Vec<String> = Vec::new();
    if let Some(manifest) = &report.manifest {
        for entry in manifest.entries() {
            trace!("Listed {}", entry.display());
        }
        warnings.extend(
            manifest
                .write_errors()
                .iter()
                .map(|e| format!("{}: {}", e, e.source)),
        );
    }
    warnings.extend(
        report
            .cleanup
            .errors
            .iter()
            .map(|e| format!("{}: {}", e, e.source)),
    );

    Ok(ConvertReport {
        input: report.target.path().to_path_buf(),
        source_count: report.manifest.as_ref().map(|m| m.len()),
        optimize: opts.optimize,
        output_dir: report.output,
        cleaned: report.cleanup.deleted,
        warnings,
    })
}
