//! Stage, commit and push a project with git.

mod error;

pub use error::PublishError;

use crate::config::ScaffolderConfig;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, info_span, Instrument};

/// One git invocation of the publish sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    /// `git add .`
    Add,
    /// `git commit -m <message>`
    Commit,
    /// `git push <remote> <branch>`
    Push,
}

impl GitStep {
    /// Returns the git subcommand name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Commit => "commit",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publishes a project to its configured remote.
#[derive(Debug, Clone)]
pub struct Publisher {
    remote: String,
    branch: String,
    commit_message: String,
}

impl Publisher {
    /// Creates a publisher pushing to `remote`/`branch`.
    pub fn new(
        remote: impl Into<String>,
        branch: impl Into<String>,
        commit_message: impl Into<String>,
    ) -> Self {
        Self {
            remote: remote.into(),
            branch: branch.into(),
            commit_message: commit_message.into(),
        }
    }

    /// Creates a publisher from the tool configuration.
    pub fn from_config(config: &ScaffolderConfig) -> Self {
        Self::new(&config.remote, &config.branch, &config.commit_message)
    }

    /// Returns the git arguments for `step`.
    fn args(&self, step: GitStep) -> Vec<&str> {
        match step {
            GitStep::Add => vec!["add", "."],
            GitStep::Commit => vec!["commit", "-m", self.commit_message.as_str()],
            GitStep::Push => vec!["push", self.remote.as_str(), self.branch.as_str()],
        }
    }

    /// Runs `add`, `commit` and `push` in `project`, stopping at the first failure.
    ///
    /// A commit made before a failed push is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] naming the step that failed.
    pub async fn publish(&self, project: &Path, clone_url: &str) -> Result<(), PublishError> {
        let span = info_span!(
            "publish",
            project = %project.display(),
            clone_url = %clone_url,
            remote = %self.remote,
            branch = %self.branch
        );

        async {
            info!("Publishing changes");

            for step in [GitStep::Add, GitStep::Commit, GitStep::Push] {
                run_git_command(project, step, &self.args(step)).await?;
            }

            info!("Changes pushed");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Runs a git command in `path`.
async fn run_git_command(path: &Path, step: GitStep, args: &[&str]) -> Result<(), PublishError> {
    debug!(step = %step, args = %args.join(" "), "Running git command");

    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| PublishError::LaunchFailed { step, source: e })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let message = if stderr.trim().is_empty() {
            format!("{} ({})", stdout.trim(), output.status)
        } else {
            stderr.trim().to_string()
        };
        return Err(PublishError::CommandFailed { step, message });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builds_fixed_arguments() {
        let publisher = Publisher::from_config(&ScaffolderConfig::default());

        assert_eq!(publisher.args(GitStep::Add), ["add", "."]);
        assert_eq!(
            publisher.args(GitStep::Commit),
            ["commit", "-m", "Update script"]
        );
        assert_eq!(publisher.args(GitStep::Push), ["push", "origin", "main"]);
    }

    #[test]
    fn step_names() {
        assert_eq!(GitStep::Add.to_string(), "add");
        assert_eq!(GitStep::Commit.to_string(), "commit");
        assert_eq!(GitStep::Push.to_string(), "push");
    }

    #[tokio::test]
    async fn publish_outside_repository_fails_at_add() {
        let temp = TempDir::new().unwrap();
        let publisher = Publisher::from_config(&ScaffolderConfig::default());

        let error = publisher
            .publish(temp.path(), "https://github.com/octo/demo.git")
            .await
            .unwrap_err();

        assert_eq!(error.step(), GitStep::Add);
    }
}
