//! Pipeline orchestration.
//!
//! A [`Pipeline`] runs the stages in a fixed order:
//!
//! - compile: source file or directory to class files
//! - package: class files to one dex bundle
//! - disassemble: bundle to a directory of smali files
//! - clean: remove the manifest, the bundle and the class files
//!
//! A fatal error in any stage aborts the run and skips cleanup, so
//! intermediate artifacts stay on disk for inspection.
//!
//! # Example
//!
//! ```ignore
//! use java2smali_core::{InputTarget, Pipeline, ProcessToolchain};
//!
//! let toolchain = ProcessToolchain::default();
//! let target = InputTarget::resolve("Foo.java")?;
//! let report = Pipeline::new(&toolchain).optimize(false).run(&target)?;
//! println!("smali written to {}", report.output.display());
//! ```

mod runner;
pub mod stages;
mod state;

pub use runner::{Pipeline, PipelineReport};
pub use state::PipelineState;
