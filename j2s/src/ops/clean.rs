//! Clean operation - remove intermediate artifacts for an input.

use java2smali_core::{InputTarget, cleanup};

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes the manifest, bundle and compiled output a conversion of
/// `target` would have created. The input and `converted/` are kept.
pub fn clean(target: &InputTarget, opts: CleanOptions) -> CleanReport {
    let paths = target.workspace();
    let compiled = target.compiled_artifact();

    if opts.dry_run {
        return CleanReport {
            dry_run: true,
            deleted: cleanup::pending(&paths, &compiled),
            warnings: Vec::new(),
        };
    }

    let result = cleanup::clean(&paths, &compiled);
    CleanReport {
        dry_run: false,
        warnings: result
            .errors
            .iter()
            .map(|e| format!("{}: {}", e, e.source))
            .collect(),
        deleted: result.deleted,
    }
}
