//! Registry error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the registry file.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Failed to read or write the registry file.
    #[error("Failed to access registry '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not a valid JSON record list.
    #[error("Failed to parse registry '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the record list.
    #[error("Failed to serialize registry '{path}': {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
