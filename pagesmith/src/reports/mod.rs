//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod build;
mod check;
mod clear;
mod output;

pub use build::BuildReport;
pub use check::CheckReport;
pub use clear::ClearReport;
pub use output::{Report, TerminalOutput};

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: String,
}
