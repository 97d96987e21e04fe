//! Convert command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a successful conversion.
#[derive(Debug)]
pub struct ConvertReport {
    /// Converted file or directory.
    pub input: PathBuf,
    /// Number of sources listed in the manifest (directory mode only).
    pub source_count: Option<usize>,
    /// Whether the bundle was optimized.
    pub optimize: bool,
    /// Directory holding the smali output.
    pub output_dir: PathBuf,
    /// Intermediate artifacts removed after the run.
    pub cleaned: Vec<PathBuf>,
    /// Non-fatal problems (skipped manifest entries, undeletable paths).
    pub warnings: Vec<String>,
}

impl ConvertReport {
    fn mode(&self) -> String {
        match self.source_count {
            Some(1) => "directory (1 source)".to_string(),
            Some(n) => format!("directory ({} sources)", n),
            None => "file".to_string(),
        }
    }
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.key_value("Input", &self.input.display().to_string());
        out.key_value("Mode", &self.mode());
        out.key_value("Optimize", if self.optimize { "yes" } else { "no" });
        out.key_value("Output", &self.output_dir.display().to_string());

        if !self.cleaned.is_empty() {
            out.newline();
            out.section("Cleaned");
            for path in &self.cleaned {
                out.removed_item(&path.display().to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_render_directory_run() {
        let report = ConvertReport {
            input: PathBuf::from("/work/proj"),
            source_count: Some(2),
            optimize: false,
            output_dir: PathBuf::from("/work/converted"),
            cleaned: vec![
                PathBuf::from("/work/FilesList.txt"),
                PathBuf::from("/work/classes.dex"),
                PathBuf::from("/work/proj_compiled"),
            ],
            warnings: vec!["cannot add '/work/proj/secret' to the manifest: permission denied".into()],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        warning: cannot add '/work/proj/secret' to the manifest: permission denied
        Input: /work/proj
        Mode: directory (2 sources)
        Optimize: no
        Output: /work/converted

        Cleaned:
          - /work/FilesList.txt
          - /work/classes.dex
          - /work/proj_compiled
        ");
    }

    #[test]
    fn test_render_file_run() {
        let report = ConvertReport {
            input: PathBuf::from("/work/Foo.java"),
            source_count: None,
            optimize: true,
            output_dir: PathBuf::from("/work/converted"),
            cleaned: Vec::new(),
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        Input: /work/Foo.java
        Mode: file
        Optimize: yes
        Output: /work/converted
        ");
    }
}
