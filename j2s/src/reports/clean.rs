//! Clean command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from removing intermediate artifacts.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Deleted paths (or paths that would be deleted in a dry run).
    pub deleted: Vec<PathBuf>,
    /// Paths that could not be deleted.
    pub warnings: Vec<String>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.deleted.is_empty() {
            out.preformatted("No intermediate artifacts found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.deleted {
            out.removed_item(&path.display().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::BufferOutput;

    #[test]
    fn test_render_dry_run() {
        let report = CleanReport {
            dry_run: true,
            deleted: vec![
                PathBuf::from("/work/FilesList.txt"),
                PathBuf::from("/work/proj_compiled"),
            ],
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        Would delete:
          - /work/FilesList.txt
          - /work/proj_compiled
        ");
    }

    #[test]
    fn test_render_nothing_to_delete() {
        let report = CleanReport {
            dry_run: false,
            deleted: Vec::new(),
            warnings: vec!["cannot delete '/work/classes.dex': permission denied".into()],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        warning: cannot delete '/work/classes.dex': permission denied
        No intermediate artifacts found.
        ");
    }
}
