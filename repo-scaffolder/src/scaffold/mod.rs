//! Local project scaffolding.
//!
//! Creates the fixed layout for a new project:
//!
//! ```text
//! <name>/
//! ├── src/
//! ├── tests/
//! ├── docs/
//! ├── README.md
//! ├── requirements.txt
//! └── .gitignore
//! ```
//!
//! Existing directories are reused. Existing template files are overwritten.

mod error;

pub use error::ScaffoldError;

use crate::templates::{TemplateRenderer, PROJECT_FILES};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Subdirectories created under every project root.
pub const PROJECT_DIRS: [&str; 3] = ["src", "tests", "docs"];

/// Creates the project layout for `name` under `workspace`.
///
/// # Returns
///
/// The absolute path of the project root.
///
/// # Errors
///
/// Returns [`ScaffoldError`] on the first filesystem or rendering failure;
/// anything created before the failure is left in place.
pub fn setup_project(
    workspace: &Path,
    name: &str,
    renderer: &TemplateRenderer,
) -> Result<PathBuf, ScaffoldError> {
    let root = workspace.join(name);
    info!(repo = %name, path = %root.display(), "Setting up project structure");

    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        std::fs::create_dir_all(&path).map_err(|e| ScaffoldError::CreateDir {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    for file in &PROJECT_FILES {
        let path = root.join(file.path);
        let contents =
            renderer
                .render_project_file(file, name)
                .map_err(|e| ScaffoldError::Template {
                    path: path.display().to_string(),
                    source: e,
                })?;

        std::fs::write(&path, contents).map_err(|e| ScaffoldError::WriteFile {
            path: path.display().to_string(),
            source: e,
        })?;
        debug!(path = %path.display(), "Wrote template file");
    }

    std::fs::canonicalize(&root).map_err(|e| ScaffoldError::CreateDir {
        path: root.display().to_string(),
        source: e,
    })
}
