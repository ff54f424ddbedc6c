//! Session summary types.

use super::result::ActionResult;

/// Summary of an interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repositories created and registered.
    pub repositories_created: usize,

    /// Number of times the managed script was replaced.
    pub scripts_updated: usize,

    /// Number of updates whose script failed testing.
    pub scripts_failed: usize,

    /// Number of updates pushed.
    pub changes_published: usize,

    /// Number of recoverable failures reported.
    pub failures: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with an action result.
    pub fn record_result(&mut self, result: &ActionResult) {
        match result {
            ActionResult::Created { .. } => self.repositories_created += 1,
            ActionResult::Published { .. } => {
                self.scripts_updated += 1;
                self.changes_published += 1;
            }
            ActionResult::ScriptFailed { .. } => {
                self.scripts_updated += 1;
                self.scripts_failed += 1;
            }
            ActionResult::Skipped { .. } => {}
        }
    }

    /// Records a recoverable failure.
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Returns true if any update failed or a recoverable error occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.scripts_failed > 0 || self.failures > 0
    }
}
