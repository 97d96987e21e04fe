mod clean;
mod completions;
mod convert;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::Result;

/// Extension trait for exiting on fatal errors with pretty formatting.
///
/// This is the only place that decides the process exit status.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for java2smali_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                if let Some(log) = e.compile_log() {
                    eprintln!("{}", log.as_str().trim_end());
                }
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for java2smali_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "java2smali")]
#[command(version)]
#[command(about = "Convert Java sources to smali")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to java2smali.toml (defaults to ./java2smali.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert(cmd) => cmd.run(self.config.as_deref()),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile, dex and disassemble a Java file or directory
    Convert(ConvertCommand),

    /// Remove intermediate artifacts left by an aborted conversion
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
