use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use java2smali_core::InputTarget;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Java source file or directory that was being converted
    pub path: PathBuf,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let target = InputTarget::resolve(&self.path).unwrap_or_exit();

        let report = ops::clean(
            &target,
            ops::clean::CleanOptions {
                dry_run: self.dry_run,
            },
        );

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
