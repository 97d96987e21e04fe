//! Configuration for java2smali.
//!
//! The only configurable concern is which external programs run each
//! pipeline stage. Flags, language level and file names are fixed.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod toolchain;

use std::str::FromStr;

pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, ConfigFile};
use serde::Deserialize;
pub use toolchain::{ToolCommand, ToolchainConfig};

/// Root of java2smali.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Programs used for each stage
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

impl Config {
    /// Parse a configuration with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}
