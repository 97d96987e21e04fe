use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    Error, Result,
    paths::{WorkspacePaths, compiled_dir_path, compiled_file_path},
};

/// The file or directory a run converts.
///
/// Resolved once from the file system at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputTarget {
    SourceFile(PathBuf),
    SourceDirectory(PathBuf),
}

impl InputTarget {
    /// Resolve a user-supplied path.
    ///
    /// A single trailing `"` (left behind by some shells when a quoted path
    /// ends in a separator) is dropped and the path is made absolute.
    /// Directories whose path contains a space are refused because the
    /// manifest lists paths unquoted. A file that is its own compiled
    /// artifact (`Foo.class`) is refused so cleanup can never delete it.
    pub fn resolve(raw: impl AsRef<Path>) -> Result<Self> {
        let path = strip_trailing_quote(raw.as_ref());
        let path = std::path::absolute(&path).map_err(|e| Error::io(&path, e))?;

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Box::new(Error::InputNotFound { path }));
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        if !metadata.is_dir() {
            if compiled_file_path(&path) == path {
                return Err(Box::new(Error::CompiledInput { path }));
            }
            return Ok(Self::SourceFile(path));
        }
        if path.to_string_lossy().contains(' ') {
            return Err(Box::new(Error::SpacesInDirectoryPath { path }));
        }
        Ok(Self::SourceDirectory(path))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::SourceFile(path) | Self::SourceDirectory(path) => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::SourceDirectory(_))
    }

    /// Directory holding the input, where the run places its artifacts.
    pub fn parent_dir(&self) -> &Path {
        let path = self.path();
        path.parent().unwrap_or(path)
    }

    /// Paths used by a run on this input.
    pub fn workspace(&self) -> WorkspacePaths {
        WorkspacePaths::in_dir(self.parent_dir())
    }

    /// Where the compiler output for this input is expected.
    pub fn compiled_artifact(&self) -> PathBuf {
        match self {
            Self::SourceFile(path) => compiled_file_path(path),
            Self::SourceDirectory(path) => compiled_dir_path(path),
        }
    }

    /// Name used in compile failure messages.
    pub fn display_name(&self) -> String {
        let name = self
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path().display().to_string());
        if self.is_directory() {
            format!("{} folder", name)
        } else {
            name
        }
    }
}

fn strip_trailing_quote(path: &Path) -> PathBuf {
    match path.to_str().and_then(|s| s.strip_suffix('"')) {
        Some(stripped) => PathBuf::from(stripped),
        None => path.to_path_buf(),
    }
}
