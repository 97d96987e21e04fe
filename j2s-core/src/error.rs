use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::{DiagnosticLog, Tool};

/// Result type for pipeline operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Fatal conditions that abort a run.
///
/// Non-fatal problems (manifest entries that could not be written, paths
/// that could not be cleaned) are collected as warnings instead.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{tool} `{program}` was not found")]
    #[diagnostic(
        code(java2smali::toolchain_missing),
        help(
            "install a JDK and the Android build tools, or point [toolchain] in java2smali.toml at them"
        )
    )]
    ToolchainMissing { tool: Tool, program: String },

    #[error("failed to run {tool} `{program}`")]
    #[diagnostic(code(java2smali::tool_invocation))]
    ToolInvocation {
        tool: Tool,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot recreate '{path}'")]
    #[diagnostic(
        code(java2smali::manifest_creation),
        help("make sure nothing else occupies this path and its directory is writable")
    )]
    ManifestCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("compilation of {name} failed")]
    #[diagnostic(
        code(java2smali::compile_failed),
        help("check the compiler output above for more info")
    )]
    CompileFailed { name: String, log: DiagnosticLog },

    #[error("'{path}' does not exist")]
    InputNotFound { path: PathBuf },

    #[error("'{path}' is already a class file")]
    #[diagnostic(
        code(java2smali::compiled_input),
        help("pass the .java source instead; class files are compiler output")
    )]
    CompiledInput { path: PathBuf },

    #[error("directory path '{path}' contains spaces")]
    #[diagnostic(help(
        "only single files can be converted from paths that contain spaces; move or rename the directory"
    ))]
    SpacesInDirectoryPath { path: PathBuf },

    #[error("I/O error on '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// The captured compiler output, if this is a compile failure.
    pub fn compile_log(&self) -> Option<&DiagnosticLog> {
        match self {
            Error::CompileFailed { log, .. } => Some(log),
            _ => None,
        }
    }
}
