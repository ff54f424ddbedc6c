//! Interactive menu that sequences repository creation and script publishing.
//!
//! Each menu action returns `Result<ActionResult, Failure>`. The loop reports
//! [`Failure::Recoverable`] messages and shows the menu again; a
//! [`Failure::Fatal`] ends the session and is handed back to the caller.

mod console;
mod error;

pub use console::Console;
pub use error::Failure;

use crate::config::ScaffolderConfig;
use crate::hosting::RepositoryHost;
use crate::publish::Publisher;
use crate::registry::{Registry, RepositoryRecord};
use crate::scaffold::setup_project;
use crate::script::{ManagedScript, ScriptOutcome, ScriptRunner};
use crate::summary::{ActionResult, RunSummary};
use crate::templates::TemplateRenderer;
use std::io::Write;
use std::path::Path;
use tokio::io::AsyncBufRead;
use tracing::{error, info, warn};

/// Line that ends multi-line script input.
pub const SCRIPT_SENTINEL: &str = "EOF";

/// Prompt used to read the access token.
pub const TOKEN_PROMPT: &str = "Enter your GitHub Personal Access Token (PAT): ";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Create,
    Update,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Create),
            "2" => Some(Self::Update),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drives an interactive session against a [`RepositoryHost`].
pub struct Runner<H> {
    config: ScaffolderConfig,
    host: H,
    registry: Registry,
    renderer: TemplateRenderer,
    script: ManagedScript,
    script_runner: ScriptRunner,
    publisher: Publisher,
}

impl<H: RepositoryHost> Runner<H> {
    /// Builds a runner from the configuration and an authenticated host.
    pub fn new(config: ScaffolderConfig, host: H) -> Self {
        let script = ManagedScript::new(&config.script_path);
        Self {
            registry: Registry::new(&config.registry_path),
            renderer: TemplateRenderer::new(),
            script_runner: ScriptRunner::new(&config.interpreter, script.clone()),
            publisher: Publisher::from_config(&config),
            script,
            config,
            host,
        }
    }

    /// Returns the registry this runner records repositories in.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs the menu loop until the user exits, input closes, or a fatal
    /// failure occurs.
    ///
    /// # Errors
    ///
    /// Returns the first [`Failure::Fatal`]; no further input is read after it.
    pub async fn run<R, W>(&self, console: &mut Console<R, W>) -> Result<RunSummary, Failure>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut summary = RunSummary::new();

        loop {
            print_menu(console)?;
            let Some(answer) = console.prompt("Choose an option: ").await? else {
                info!("Input closed, leaving menu");
                break;
            };

            let result = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Create) => self.create_repository(console).await,
                Some(MenuChoice::Update) => self.update_repository(console).await,
                Some(MenuChoice::Exit) => {
                    console.say("Exiting.")?;
                    break;
                }
                None => {
                    console.say("Invalid option. Please try again.")?;
                    continue;
                }
            };

            match result {
                Ok(result) => summary.record_result(&result),
                Err(Failure::Recoverable(message)) => {
                    warn!(error = %message, "Action failed");
                    console.say(&message)?;
                    summary.record_failure();
                }
                Err(fatal) => {
                    error!(error = %fatal, "Fatal failure, ending session");
                    return Err(fatal);
                }
            }
        }

        Ok(summary)
    }

    /// Creates the remote repository, scaffolds it locally and registers it.
    async fn create_repository<R, W>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<ActionResult, Failure>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let name = required(console, "Enter the repository name: ").await?;
        let description = required(
            console,
            "Enter a description for the repository (optional): ",
        )
        .await?;

        console.say("\nCreating repository on GitHub...")?;
        let clone_url = self.host.create_repository(&name, &description).await?;
        console.say(format!("Repository {name} created successfully."))?;

        console.say("\nSetting up the project structure locally...")?;
        // The remote repository is not rolled back; name it so it can be removed by hand.
        let path = setup_project(&self.config.workspace_dir, &name, &self.renderer).map_err(
            |e| {
                Failure::Fatal(format!(
                    "{}. Remote repository {clone_url} has no local project or registry entry.",
                    Failure::from(e)
                ))
            },
        )?;
        console.say(format!("Project structure for {name} created successfully."))?;

        console.say("\nSaving repository information...")?;
        self.registry
            .save(RepositoryRecord {
                name: name.clone(),
                description,
                path: path.display().to_string(),
                clone_url: clone_url.clone(),
            })
            .map_err(|e| {
                Failure::Fatal(format!(
                    "{e}. Remote repository {clone_url} and local project {} were created but not registered.",
                    path.display()
                ))
            })?;
        console.say(format!(
            "Repository {name} saved to {}.",
            self.registry.path().display()
        ))?;

        console.say("\nRepository setup complete.")?;
        Ok(ActionResult::Created {
            repository: name,
            clone_url,
        })
    }

    /// Replaces the managed script of a registered repository, smoke-tests it
    /// and publishes it if the test passes.
    async fn update_repository<R, W>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<ActionResult, Failure>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let records = self.registry.load()?;
        if records.is_empty() {
            console.say("No repositories found. Please create a repository first.")?;
            return Ok(ActionResult::Skipped {
                reason: "no repositories".to_string(),
            });
        }

        console.say("\nExisting Repositories:")?;
        for (i, record) in records.iter().enumerate() {
            console.say(format!("{}. {}", i + 1, record.name))?;
        }

        let selection = required(console, "Select a repository by number: ").await?;
        let Some(record) = select_record(&records, &selection) else {
            console.say("Invalid choice. Please try again.")?;
            return Ok(ActionResult::Skipped {
                reason: format!("invalid selection '{selection}'"),
            });
        };

        console.say(format!(
            "\nEnter the new script code (end with {SCRIPT_SENTINEL}):"
        ))?;
        let content = console.read_until(SCRIPT_SENTINEL).await?.join("\n");

        let project = Path::new(&record.path);
        console.say("\nAdding or updating the script...")?;
        let script_path = self.script.update(project, &content)?;
        console.say(format!("Script added/updated at {}.", script_path.display()))?;

        console.say("\nTesting the script...")?;
        match self.script_runner.run(project).await {
            ScriptOutcome::Passed { stdout } => {
                if !stdout.trim().is_empty() {
                    console.say(stdout.trim_end())?;
                }
                console.say("Script ran successfully!")?;
            }
            ScriptOutcome::Failed { stderr } => {
                console.say(format!("Script failed to run. Error:\n{stderr}"))?;
                console.say("Script failed testing. Please fix the issues before pushing.")?;
                return Ok(ActionResult::ScriptFailed {
                    repository: record.name.clone(),
                    error: stderr,
                });
            }
        }

        console.say("\nPushing changes to GitHub...")?;
        self.publisher.publish(project, &record.clone_url).await?;
        console.say("Changes pushed to GitHub successfully.")?;

        Ok(ActionResult::Published {
            repository: record.name.clone(),
        })
    }
}

fn print_menu<R, W>(console: &mut Console<R, W>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console.say("\nMenu:")?;
    console.say("1. Create a new repository")?;
    console.say("2. Add/Update code in an existing repository")?;
    console.say("3. Exit")
}

/// Prompts for an answer; closed input here ends the session.
async fn required<R, W>(console: &mut Console<R, W>, message: &str) -> Result<String, Failure>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    console
        .prompt(message)
        .await?
        .ok_or_else(|| Failure::Fatal("Input closed while waiting for an answer.".to_string()))
}

/// Resolves a 1-based selection against the registry listing.
fn select_record<'a>(
    records: &'a [RepositoryRecord],
    selection: &str,
) -> Option<&'a RepositoryRecord> {
    let index = selection.parse::<usize>().ok()?.checked_sub(1)?;
    records.get(index)
}
