//! Publish error types.

use super::GitStep;
use thiserror::Error;

/// Errors that can occur while publishing changes.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The git executable could not be started.
    #[error("Failed to push changes: could not run git {step}: {source}")]
    LaunchFailed {
        step: GitStep,
        #[source]
        source: std::io::Error,
    },

    /// A git command exited non-zero.
    #[error("Failed to push changes: git {step} failed: {message}")]
    CommandFailed { step: GitStep, message: String },
}

impl PublishError {
    /// Returns the step that failed.
    #[must_use]
    pub fn step(&self) -> GitStep {
        match self {
            Self::LaunchFailed { step, .. } | Self::CommandFailed { step, .. } => *step,
        }
    }
}
