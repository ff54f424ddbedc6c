//! Registry record type.

use serde::{Deserialize, Serialize};

/// A repository created by this tool, pairing the remote with its local project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name (not enforced unique).
    pub name: String,

    /// Free-text description, possibly empty.
    pub description: String,

    /// Absolute path to the local project root.
    pub path: String,

    /// Clone URL reported by the hosting service.
    pub clone_url: String,
}
