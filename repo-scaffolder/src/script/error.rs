//! Managed script error types.

use thiserror::Error;

/// Errors that can occur while replacing the managed script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Failed to write the script file.
    #[error("Failed to add or update the script '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
