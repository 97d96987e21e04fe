use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use java2smali_config::{Config, ConfigFile};
use java2smali_core::InputTarget;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Java source file or directory of sources
    pub path: PathBuf,

    /// Package without dex optimizations
    #[arg(short, long)]
    pub no_optimize: bool,
}

impl ConvertCommand {
    pub fn run(&self, config_path: Option<&Path>) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to read current directory")?;
        let config = match ConfigFile::discover(config_path, &cwd).unwrap_or_exit() {
            Some(file) => {
                debug!(path = %file.path().display(), "Loaded config");
                file.into_config()
            }
            None => Config::default(),
        };
        debug!(
            javac = %config.toolchain.javac,
            dx = %config.toolchain.dx,
            baksmali = %config.toolchain.baksmali,
            "Using toolchain"
        );
        let target = InputTarget::resolve(&self.path).unwrap_or_exit();

        let report = ops::convert(
            &config,
            &target,
            ops::convert::ConvertOptions {
                optimize: !self.no_optimize,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
