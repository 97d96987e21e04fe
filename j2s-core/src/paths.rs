//! Fixed file-system names and the per-run paths derived from them.
//!
//! Every intermediate artifact and the final output live in the directory
//! that contains the input. These names are not configurable.

use std::path::{Path, PathBuf};

/// Newline-delimited source list handed to the compiler in directory mode.
pub const MANIFEST_FILE_NAME: &str = "FilesList.txt";

/// Packaged dex bundle.
pub const BUNDLE_FILE_NAME: &str = "classes.dex";

/// Directory receiving the disassembled smali files.
pub const OUTPUT_DIR_NAME: &str = "converted";

/// Suffix of the class-file directory produced from a source directory.
pub const COMPILED_DIR_SUFFIX: &str = "_compiled";

/// Extension of compiled class files.
pub const BYTECODE_EXTENSION: &str = "class";

/// Paths shared by every stage of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    /// Directory containing the input; all artifacts are placed here.
    pub parent_dir: PathBuf,
    /// Source list written in directory mode.
    pub manifest: PathBuf,
    /// Packaged bundle.
    pub bundle: PathBuf,
    /// Disassembly output directory.
    pub output: PathBuf,
}

impl WorkspacePaths {
    /// Compute the paths for a run whose input lives in `parent_dir`.
    pub fn in_dir(parent_dir: impl Into<PathBuf>) -> Self {
        let parent_dir = parent_dir.into();
        Self {
            manifest: parent_dir.join(MANIFEST_FILE_NAME),
            bundle: parent_dir.join(BUNDLE_FILE_NAME),
            output: parent_dir.join(OUTPUT_DIR_NAME),
            parent_dir,
        }
    }
}

/// Class file compiled from a single source: same stem, `.class` extension.
pub fn compiled_file_path(source: &Path) -> PathBuf {
    source.with_extension(BYTECODE_EXTENSION)
}

/// Class directory compiled from a source directory: `<name>_compiled`,
/// next to the source directory.
pub fn compiled_dir_path(source_dir: &Path) -> PathBuf {
    let mut name = source_dir
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(COMPILED_DIR_SUFFIX);
    source_dir.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_paths() {
        let paths = WorkspacePaths::in_dir("/work");
        assert_eq!(paths.manifest, Path::new("/work/FilesList.txt"));
        assert_eq!(paths.bundle, Path::new("/work/classes.dex"));
        assert_eq!(paths.output, Path::new("/work/converted"));
    }

    #[test]
    fn test_compiled_file_path() {
        assert_eq!(
            compiled_file_path(Path::new("/work/Foo.java")),
            Path::new("/work/Foo.class")
        );
        // A non-.java input never maps onto itself.
        assert_eq!(
            compiled_file_path(Path::new("/work/Foo")),
            Path::new("/work/Foo.class")
        );
    }

    #[test]
    fn test_compiled_dir_path() {
        assert_eq!(
            compiled_dir_path(Path::new("/work/proj")),
            Path::new("/work/proj_compiled")
        );
    }
}
