//! Compiler output capture and pass/fail classification.

use std::fmt;

/// Substring whose presence marks a compiler run as failed.
pub const ERROR_MARKER: &str = "error";

/// Returns true if `log` contains [`ERROR_MARKER`].
///
/// This is a plain case-sensitive substring test. Any mention of the word,
/// such as a note naming `error.txt`, classifies the run as failed, while
/// an upper-case `ERROR` does not.
pub fn contains_error_marker(log: &str) -> bool {
    log.contains(ERROR_MARKER)
}

/// Outcome of classifying a compiler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    Passed,
    Failed,
}

/// Text captured from one toolchain invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
    text: String,
}

impl DiagnosticLog {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a log from raw process output, stderr first.
    pub fn from_output(stdout: &[u8], stderr: &[u8]) -> Self {
        let mut log = Self::default();
        log.push(&String::from_utf8_lossy(stderr));
        log.push(&String::from_utf8_lossy(stdout));
        log
    }

    /// Append a chunk of captured output.
    pub fn push(&mut self, chunk: &str) {
        self.text.push_str(chunk);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn outcome(&self) -> CompileOutcome {
        if contains_error_marker(&self.text) {
            CompileOutcome::Failed
        } else {
            CompileOutcome::Passed
        }
    }
}

impl fmt::Display for DiagnosticLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_marker_fails() {
        let log = DiagnosticLog::new("Foo.java:3: error: ';' expected\n1 error\n");
        assert_eq!(log.outcome(), CompileOutcome::Failed);
    }

    #[test]
    fn test_warning_only_passes() {
        let log = DiagnosticLog::new(
            "warning: [options] bootstrap class path not set in conjunction with -source 8\n1 warning\n",
        );
        assert_eq!(log.outcome(), CompileOutcome::Passed);
    }

    #[test]
    fn test_empty_log_passes() {
        let log = DiagnosticLog::default();
        assert!(log.is_empty());
        assert_eq!(log.outcome(), CompileOutcome::Passed);
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!contains_error_marker("ERROR: upper case is not matched"));
    }

    #[test]
    fn test_marker_matches_benign_mention() {
        // Known false positive of the substring rule.
        assert!(contains_error_marker("Note: Reading resources from error.txt"));
    }

    #[test]
    fn test_from_output_puts_stderr_first() {
        let log = DiagnosticLog::from_output(b"out\n", b"err\n");
        assert_eq!(log.as_str(), "err\nout\n");
    }
}
