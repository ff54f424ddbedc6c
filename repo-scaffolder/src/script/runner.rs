//! Smoke-testing the managed script in a subprocess.

use super::ManagedScript;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Result of running the managed script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// The script exited with status zero.
    Passed {
        /// Captured standard output.
        stdout: String,
    },

    /// The script exited non-zero, was killed, or could not be launched.
    Failed {
        /// Captured standard error, or a description of the failure when
        /// the script produced none.
        stderr: String,
    },
}

impl ScriptOutcome {
    /// Returns true if the script passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

/// Runs the managed script with a fixed interpreter.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    interpreter: String,
    script: ManagedScript,
}

impl ScriptRunner {
    /// Creates a runner invoking `interpreter <script>`.
    pub fn new(interpreter: impl Into<String>, script: ManagedScript) -> Self {
        Self {
            interpreter: interpreter.into(),
            script,
        }
    }

    /// Runs the script with `project` as the working directory.
    ///
    /// Waits for the script to finish; no timeout is applied.
    pub async fn run(&self, project: &Path) -> ScriptOutcome {
        let script_path = self.script.relative_path();
        debug!(
            interpreter = %self.interpreter,
            script = %script_path.display(),
            project = %project.display(),
            "Running script"
        );

        let output = match Command::new(&self.interpreter)
            .arg(script_path)
            .current_dir(project)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                warn!(interpreter = %self.interpreter, error = %e, "Failed to launch script");
                return ScriptOutcome::Failed {
                    stderr: format!("Failed to launch {}: {e}", self.interpreter),
                };
            }
        };

        if output.status.success() {
            info!("Script ran successfully");
            return ScriptOutcome::Passed {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            };
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        warn!(status = %output.status, "Script failed");
        let stderr = if stderr.trim().is_empty() {
            format!("script exited with {}", output.status)
        } else {
            stderr
        };

        ScriptOutcome::Failed { stderr }
    }
}
