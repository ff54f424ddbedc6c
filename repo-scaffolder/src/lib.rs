#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod hosting;
pub mod publish;
pub mod registry;
pub mod runner;
pub mod scaffold;
pub mod script;
pub mod summary;
pub mod templates;

pub use config::{ConfigError, ScaffolderConfig};
pub use hosting::{GitHubHost, HostingError, RepositoryHost};
pub use publish::{GitStep, PublishError, Publisher};
pub use registry::{Registry, RegistryError, RepositoryRecord};
pub use runner::{Console, Failure, Runner, SCRIPT_SENTINEL, TOKEN_PROMPT};
pub use scaffold::{setup_project, ScaffoldError, PROJECT_DIRS};
pub use script::{ManagedScript, ScriptError, ScriptOutcome, ScriptRunner};
pub use summary::{ActionResult, RunSummary};
pub use templates::{create_handlebars_registry, TemplateError, TemplateRenderer};
