//! The external programs driven by the pipeline.
//!
//! The pipeline never spawns processes itself; it goes through a
//! [`Toolchain`]. [`ProcessToolchain`] runs the configured programs, tests
//! substitute fakes.

mod process;

use std::{fmt, path::Path};

pub use process::{ProcessToolchain, compile_args, disassemble_args, package_args};

use crate::{DiagnosticLog, Result};

/// Java language level passed as both `-source` and `-target`.
pub const LANGUAGE_LEVEL: &str = "1.8";

/// One of the three external tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Compiler,
    Packager,
    Disassembler,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Compiler => write!(f, "compiler"),
            Tool::Packager => write!(f, "packager"),
            Tool::Disassembler => write!(f, "disassembler"),
        }
    }
}

/// What the compiler is asked to compile.
#[derive(Debug, Clone, Copy)]
pub enum Sources<'a> {
    /// A single source file, compiled next to itself.
    File(&'a Path),
    /// A manifest listing every source, passed as `@manifest`.
    Manifest(&'a Path),
}

/// Arguments for one compiler invocation.
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
    pub sources: Sources<'a>,
    /// Class output directory (`-d`); only used in directory mode.
    pub output_dir: Option<&'a Path>,
}

/// Arguments for one packager invocation.
#[derive(Debug, Clone, Copy)]
pub struct PackageRequest<'a> {
    /// Class file or directory of class files.
    pub input: &'a Path,
    /// Bundle file to write.
    pub output: &'a Path,
    /// `false` adds `--no-optimize`.
    pub optimize: bool,
}

/// Capability interface over the compiler, packager and disassembler.
pub trait Toolchain {
    /// Compile sources and return everything the compiler printed.
    ///
    /// Success is decided by the caller from the returned log.
    fn compile(&self, request: &CompileRequest<'_>) -> Result<DiagnosticLog>;

    /// Pack compiled classes into one bundle.
    fn package(&self, request: &PackageRequest<'_>) -> Result<()>;

    /// Decode a bundle into a directory of smali files.
    fn disassemble(&self, bundle: &Path, output_dir: &Path) -> Result<()>;
}
