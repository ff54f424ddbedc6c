//! Tool configuration.
//!
//! Every setting has a default matching the conventional layout (a
//! `repositories.json` registry in the working directory, a Python script at
//! `src/main.py`, pushes to `origin main`). A TOML file can override any of
//! them:
//!
//! ```toml
//! registry-path = "repositories.json"
//! workspace-dir = "."
//! interpreter = "python3"
//! script-path = "src/main.py"
//! remote = "origin"
//! branch = "main"
//! commit-message = "Update script"
//! ```

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings shared by every step of a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScaffolderConfig {
    /// JSON file holding the repository registry.
    pub registry_path: PathBuf,

    /// Directory under which new project roots are created.
    pub workspace_dir: PathBuf,

    /// Program used to smoke-test the managed script.
    pub interpreter: String,

    /// Managed script location, relative to a project root.
    pub script_path: PathBuf,

    /// Remote name used when pushing.
    pub remote: String,

    /// Branch pushed to the remote.
    pub branch: String,

    /// Message used for every script update commit.
    pub commit_message: String,
}

impl Default for ScaffolderConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from("repositories.json"),
            workspace_dir: PathBuf::from("."),
            interpreter: "python3".to_string(),
            script_path: PathBuf::from("src/main.py"),
            remote: "origin".to_string(),
            branch: "main".to_string(),
            commit_message: "Update script".to_string(),
        }
    }
}

impl ScaffolderConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, malformed,
    /// or contains invalid values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading configuration");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Loads configuration from `path` if given, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validates configured values.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let required = [
            ("interpreter", self.interpreter.as_str()),
            ("remote", self.remote.as_str()),
            ("branch", self.branch.as_str()),
            ("commit-message", self.commit_message.as_str()),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: format!("{key} cannot be empty"),
                });
            }
        }

        if self.script_path.as_os_str().is_empty() || self.script_path.is_absolute() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "script-path must be a relative file path".to_string(),
            });
        }

        Ok(())
    }
}
