//! The individual pipeline stages.
//!
//! Each stage takes and returns plain paths; the only state shared between
//! stages is the file system.

pub mod compile;
pub mod disassemble;
pub mod package;

pub use compile::{CompiledArtifact, check_diagnostics, compile, compile_directory, compile_file};
pub use disassemble::disassemble;
pub use package::package;
