//! Session summary types and helpers.

mod result;
mod run_summary;

pub use result::ActionResult;
pub use run_summary::RunSummary;
