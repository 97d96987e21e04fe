//! Source list generation for directory-mode compiles.
//!
//! The manifest is a text file with one absolute source path per line,
//! passed to the compiler as an `@file` argument.

use std::{
    fs::{self, File, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::{Error, Result};

/// A single entry that could not be listed or written.
///
/// These do not stop the walk; sibling entries are still processed.
#[derive(Debug, Error)]
#[error("cannot add '{path}' to the manifest")]
pub struct ManifestWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A freshly written manifest.
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    entries: Vec<PathBuf>,
    write_errors: Vec<ManifestWriteError>,
}

impl Manifest {
    /// Location of the manifest file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Paths written to the manifest, in file-system listing order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries skipped because of I/O errors during the walk.
    pub fn write_errors(&self) -> &[ManifestWriteError] {
        &self.write_errors
    }

    fn record_error(&mut self, path: &Path, source: std::io::Error) {
        warn!("Cannot add {} to {}: {}", path.display(), self.path.display(), source);
        self.write_errors.push(ManifestWriteError {
            path: path.to_path_buf(),
            source,
        });
    }
}

/// Write the manifest for every non-directory entry under `root`.
///
/// Any previous file at `manifest_path` is replaced. Entries are appended
/// one line at a time while walking depth-first, so an interrupted run
/// leaves a valid prefix behind.
///
/// # Errors
///
/// Returns [`Error::ManifestCreation`] if the manifest file cannot be
/// recreated, e.g. because a directory occupies its path.
pub fn build_manifest(root: &Path, manifest_path: &Path) -> Result<Manifest> {
    let root = std::path::absolute(root).map_err(|e| Error::io(root, e))?;

    match fs::remove_file(manifest_path) {
        Ok(()) => debug!("Removed stale {}", manifest_path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => debug!("Cannot remove {}: {}", manifest_path.display(), e),
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create_new(true)
        .open(manifest_path)
        .map_err(|source| {
            Box::new(Error::ManifestCreation {
                path: manifest_path.to_path_buf(),
                source,
            })
        })?;

    let mut manifest = Manifest {
        path: manifest_path.to_path_buf(),
        entries: Vec::new(),
        write_errors: Vec::new(),
    };
    append_tree(&root, &mut file, &mut manifest);

    debug!(
        entries = manifest.len(),
        skipped = manifest.write_errors.len(),
        "Wrote {}",
        manifest.path.display()
    );
    Ok(manifest)
}

fn append_tree(dir: &Path, file: &mut File, manifest: &mut Manifest) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => return manifest.record_error(dir, e),
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                manifest.record_error(dir, e);
                continue;
            }
        };

        if path.is_dir() {
            append_tree(&path, file, manifest);
            continue;
        }

        let line = format!("{}\n", path.display());
        match file.write_all(line.as_bytes()) {
            Ok(()) => manifest.entries.push(path),
            Err(e) => manifest.record_error(&path, e),
        }
    }
}
