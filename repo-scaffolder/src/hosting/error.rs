//! Hosting client error types.

use thiserror::Error;

/// Errors that can occur while talking to the hosting service.
#[derive(Debug, Error)]
pub enum HostingError {
    /// The API client could not be constructed.
    #[error("Authentication failed: {0}")]
    Client(#[source] octocrab::Error),

    /// Repository creation was rejected or did not complete.
    #[error("Failed to create repository '{name}': {source}")]
    CreateFailed {
        name: String,
        #[source]
        source: octocrab::Error,
    },

    /// The hosting service returned no usable clone URL.
    #[error("Repository '{name}' was created but no clone URL was returned")]
    MissingCloneUrl { name: String },
}
