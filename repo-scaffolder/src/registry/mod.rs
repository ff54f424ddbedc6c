//! Registry of repositories created by this tool.
//!
//! The registry is a single JSON file whose top-level value is an array of
//! [`RepositoryRecord`]s in insertion order. A missing file is an empty
//! registry. Saving appends and rewrites the whole file through a temporary
//! file in the same directory, so a crash mid-write leaves the previous
//! contents intact.
//!
//! There is no locking; concurrent sessions against the same file race and
//! the last writer wins.

mod error;
mod record;

pub use error::RegistryError;
pub use record::RepositoryRecord;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Indentation used when writing the registry file.
const INDENT: &[u8] = b"    ";

/// Handle to the registry file.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    /// Creates a handle for the registry stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the registry file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records in file order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] if the file exists but is not a JSON
    /// array of records, or [`RegistryError::Io`] if it cannot be read.
    pub fn load(&self) -> Result<Vec<RepositoryRecord>, RegistryError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Registry file absent, treating as empty");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| RegistryError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| RegistryError::Parse {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// Appends `record` to the registry.
    ///
    /// The existing records are re-read on every call; prior entries are never
    /// reordered or removed, and duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the existing file cannot be loaded or the
    /// new contents cannot be written.
    pub fn save(&self, record: RepositoryRecord) -> Result<(), RegistryError> {
        let mut records = self.load()?;
        let name = record.name.clone();
        records.push(record);

        self.write_all(&records)?;
        info!(
            repo = %name,
            path = %self.path.display(),
            count = records.len(),
            "Saved repository to registry"
        );
        Ok(())
    }

    /// Rewrites the registry file with `records` via temp file and rename.
    fn write_all(&self, records: &[RepositoryRecord]) -> Result<(), RegistryError> {
        let io_error = |source: std::io::Error| RegistryError::Io {
            path: self.path.display().to_string(),
            source,
        };

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        records
            .serialize(&mut serializer)
            .map_err(|e| RegistryError::Serialize {
                path: self.path.display().to_string(),
                source: e,
            })?;

        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(&buf).map_err(io_error)?;
        file.as_file().sync_all().map_err(io_error)?;
        file.persist(&self.path).map_err(|e| io_error(e.error))?;

        Ok(())
    }
}
