//! Menu action result types.

/// Result of one completed menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// A repository was created, scaffolded and registered.
    Created {
        /// Repository name.
        repository: String,
        /// Clone URL reported by the hosting service.
        clone_url: String,
    },

    /// The managed script was replaced, passed its smoke test and was pushed.
    Published {
        /// Repository name.
        repository: String,
    },

    /// The managed script was replaced but failed its smoke test.
    ScriptFailed {
        /// Repository name.
        repository: String,
        /// Captured error output.
        error: String,
    },

    /// The action did nothing (no repositories, invalid selection, ...).
    Skipped {
        /// Reason for skipping.
        reason: String,
    },
}
