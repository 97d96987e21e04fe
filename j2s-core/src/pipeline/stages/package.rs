//! Package stage - class files to one dex bundle.

use std::path::{Path, PathBuf};

use crate::{
    Result,
    toolchain::{PackageRequest, Toolchain},
};

/// Pack `artifact` into `bundle`, replacing any earlier bundle.
///
/// Only spawn failures are reported; the packager's own exit status is
/// not inspected.
pub fn package(
    toolchain: &dyn Toolchain,
    artifact: &Path,
    bundle: &Path,
    optimize: bool,
) -> Result<PathBuf> {
    toolchain.package(&PackageRequest {
        input: artifact,
        output: bundle,
        optimize,
    })?;
    Ok(bundle.to_path_buf())
}
