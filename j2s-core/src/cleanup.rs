//! Removal of intermediate artifacts after a run.
//!
//! Unlike the other stages, cleanup tolerates partial failure: every
//! path that cannot be removed is reported and the sweep continues.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::WorkspacePaths;

/// A path that could not be removed.
#[derive(Debug, Error)]
#[error("cannot delete '{path}'")]
pub struct CleanupError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Result of a cleanup sweep.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Targets that existed and were removed completely.
    pub deleted: Vec<PathBuf>,
    /// Number of file-system entries removed, including directory contents.
    pub removed_entries: usize,
    /// Paths that could not be removed.
    pub errors: Vec<CleanupError>,
}

impl CleanupReport {
    /// Whether every existing target was removed.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    fn fail(&mut self, path: &Path, source: std::io::Error) {
        warn!("Cannot delete {}: {}", path.display(), source);
        self.errors.push(CleanupError {
            path: path.to_path_buf(),
            source,
        });
    }
}

/// The intermediate artifacts of a run: manifest, bundle and compiled output.
///
/// The input and the disassembly output are never part of this list.
pub fn targets(paths: &WorkspacePaths, compiled: &Path) -> [PathBuf; 3] {
    [
        paths.manifest.clone(),
        paths.bundle.clone(),
        compiled.to_path_buf(),
    ]
}

/// Targets that currently exist and would be removed by [`clean`].
pub fn pending(paths: &WorkspacePaths, compiled: &Path) -> Vec<PathBuf> {
    targets(paths, compiled)
        .into_iter()
        .filter(|path| fs::symlink_metadata(path).is_ok())
        .collect()
}

/// Delete the intermediate artifacts of a run.
///
/// Targets that do not exist are skipped silently; file-mode runs never
/// create a manifest. Directories are removed with all of their contents.
pub fn clean(paths: &WorkspacePaths, compiled: &Path) -> CleanupReport {
    let mut report = CleanupReport::default();
    for target in targets(paths, compiled) {
        remove_target(&target, &mut report);
    }
    report
}

fn remove_target(path: &Path, report: &mut CleanupReport) {
    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Nothing to delete at {}", path.display());
        }
        Err(e) => report.fail(path, e),
        Ok(_) => {
            if remove_entry(path, report) {
                debug!("Deleted {}", path.display());
                report.deleted.push(path.to_path_buf());
            }
        }
    }
}

fn remove_entry(path: &Path, report: &mut CleanupReport) -> bool {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            report.fail(path, e);
            return false;
        }
    };

    if metadata.is_dir() {
        return remove_tree(path, report);
    }

    match fs::remove_file(path) {
        Ok(()) => {
            report.removed_entries += 1;
            true
        }
        Err(e) => {
            report.fail(path, e);
            false
        }
    }
}

fn remove_tree(dir: &Path, report: &mut CleanupReport) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            report.fail(dir, e);
            return false;
        }
    };

    for entry in entries {
        match entry {
            Ok(entry) => {
                remove_entry(&entry.path(), report);
            }
            Err(e) => report.fail(dir, e),
        }
    }

    match fs::remove_dir(dir) {
        Ok(()) => {
            report.removed_entries += 1;
            true
        }
        Err(e) => {
            report.fail(dir, e);
            false
        }
    }
}
