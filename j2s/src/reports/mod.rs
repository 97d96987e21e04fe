//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod clean;
mod convert;
mod output;

pub use clean::CleanReport;
pub use convert::ConvertReport;
pub use output::{Report, TerminalOutput};
