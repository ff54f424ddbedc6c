//! The managed script: the single file each update replaces and smoke-tests.

mod error;
mod runner;

pub use error::ScriptError;
pub use runner::{ScriptOutcome, ScriptRunner};

use std::path::{Path, PathBuf};
use tracing::info;

/// Location of the managed script inside a project.
#[derive(Debug, Clone)]
pub struct ManagedScript {
    relative_path: PathBuf,
}

impl ManagedScript {
    /// Creates a handle for the script at `relative_path` under each project root.
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }

    /// Returns the script path relative to a project root.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns the script path inside `project`.
    pub fn path_in(&self, project: &Path) -> PathBuf {
        project.join(&self.relative_path)
    }

    /// Replaces the script in `project` with `content` verbatim.
    ///
    /// No backup of the previous contents is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::WriteFailed`] if the file cannot be written,
    /// for example when the project's `src` directory no longer exists.
    pub fn update(&self, project: &Path, content: &str) -> Result<PathBuf, ScriptError> {
        let path = self.path_in(project);
        std::fs::write(&path, content).map_err(|e| ScriptError::WriteFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        info!(path = %path.display(), bytes = content.len(), "Script added/updated");
        Ok(path)
    }
}
