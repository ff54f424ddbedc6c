//! Menu action failure types.

use crate::config::ConfigError;
use crate::hosting::HostingError;
use crate::publish::PublishError;
use crate::registry::RegistryError;
use crate::scaffold::ScaffoldError;
use crate::script::ScriptError;
use thiserror::Error;

/// How a failed menu action affects the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Reported, then the menu loop continues.
    #[error("{0}")]
    Recoverable(String),

    /// Reported, then the session ends.
    #[error("{0}")]
    Fatal(String),
}

impl Failure {
    /// Returns true if the session must end.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    /// Returns the message to show the user.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Recoverable(message) | Self::Fatal(message) => message,
        }
    }
}

impl From<ScriptError> for Failure {
    fn from(error: ScriptError) -> Self {
        Self::Recoverable(error.to_string())
    }
}

impl From<RegistryError> for Failure {
    fn from(error: RegistryError) -> Self {
        Self::Fatal(error.to_string())
    }
}

impl From<ScaffoldError> for Failure {
    fn from(error: ScaffoldError) -> Self {
        Self::Fatal(format!("Failed to set up project structure: {error}"))
    }
}

impl From<HostingError> for Failure {
    fn from(error: HostingError) -> Self {
        Self::Fatal(error.to_string())
    }
}

impl From<PublishError> for Failure {
    fn from(error: PublishError) -> Self {
        Self::Fatal(error.to_string())
    }
}

impl From<ConfigError> for Failure {
    fn from(error: ConfigError) -> Self {
        Self::Fatal(error.to_string())
    }
}

impl From<std::io::Error> for Failure {
    fn from(error: std::io::Error) -> Self {
        Self::Fatal(format!("Console I/O failed: {error}"))
    }
}
