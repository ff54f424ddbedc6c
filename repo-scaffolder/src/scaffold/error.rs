//! Scaffolding error types.

use thiserror::Error;

/// Errors that can occur while creating a project layout.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a template file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to render a template file.
    #[error("Failed to render '{path}': {source}")]
    Template {
        path: String,
        #[source]
        source: crate::templates::TemplateError,
    },
}
