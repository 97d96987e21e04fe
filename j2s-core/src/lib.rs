//! Pipeline that turns Java sources into smali.
//!
//! A run compiles a source file or directory with the Java compiler, packs
//! the resulting class files into a single dex bundle, disassembles the
//! bundle into a `converted/` directory and finally removes every
//! intermediate artifact it created.
//!
//! The external programs are reached only through the [`Toolchain`] trait,
//! so the orchestration can be exercised with fakes.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod cleanup;
mod diagnostic;
mod error;
mod input;
pub mod manifest;
pub mod paths;
pub mod pipeline;
pub mod toolchain;

pub use cleanup::{CleanupError, CleanupReport};
pub use diagnostic::{CompileOutcome, DiagnosticLog, ERROR_MARKER, contains_error_marker};
pub use error::{Error, Result};
pub use input::InputTarget;
pub use manifest::{Manifest, ManifestWriteError};
pub use paths::WorkspacePaths;
pub use pipeline::{Pipeline, PipelineReport, PipelineState};
pub use toolchain::{ProcessToolchain, Tool, Toolchain};
