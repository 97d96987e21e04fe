//! Disassemble stage - dex bundle to smali.

use std::path::{Path, PathBuf};

use crate::{Result, toolchain::Toolchain};

/// Decode `bundle` into `output_dir`.
///
/// The produced directory is not validated.
pub fn disassemble(toolchain: &dyn Toolchain, bundle: &Path, output_dir: &Path) -> Result<PathBuf> {
    toolchain.disassemble(bundle, output_dir)?;
    Ok(output_dir.to_path_buf())
}
