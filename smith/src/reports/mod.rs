//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod list;
mod output;

pub use bake::{BakeReport, GenerationResult, PreviewFile, WrittenResult};
pub use check::CheckReport;
pub use list::{ListReport, RecordSummary};
pub use output::{Report, TerminalOutput};
