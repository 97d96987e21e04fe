//! Core operations.
//!
//! This module contains the business logic for java2smali commands,
//! separated from CLI argument parsing and output rendering.

pub mod clean;
pub mod convert;

pub use clean::clean;
pub use convert::convert;
