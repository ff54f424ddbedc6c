//! CLI for the repository scaffolder.
//!
//! Prompts for a GitHub token, then runs the interactive menu for creating
//! repositories and publishing script updates.

use clap::Parser;
use repo_scaffolder::{
    Console, Failure, GitHubHost, RunSummary, Runner, ScaffolderConfig, TOKEN_PROMPT,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository Scaffolder - Create GitHub repositories and publish smoke-tested script updates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML file overriding the default settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(exit_status(&summary))
        }
        Err(e) => {
            eprintln!("{e}");
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, so logs stay
///   out of the interactive prompts on stdout
/// - Log level filtering via `RUST_LOG` env var (defaults to "warn")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, Failure> {
    let config = ScaffolderConfig::load_or_default(args.config.as_deref())?;
    let mut console = Console::new(BufReader::new(tokio::io::stdin()), std::io::stdout());

    let token = console
        .prompt(TOKEN_PROMPT)
        .await?
        .ok_or_else(|| Failure::Fatal("No token provided.".to_string()))?;
    let host = GitHubHost::authenticate(&token)?;

    Runner::new(config, host).run(&mut console).await
}

/// Maps a completed session to a process exit status.
///
/// Sessions where a script failed testing or an error was reported exit
/// with 1; fatal failures (status 2) never reach this point.
fn exit_status(summary: &RunSummary) -> u8 {
    if summary.has_failures() {
        1
    } else {
        0
    }
}

/// Prints the final session summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Repositories created: {}", summary.repositories_created);
    println!("  Scripts updated: {}", summary.scripts_updated);
    println!("  Scripts failed testing: {}", summary.scripts_failed);
    println!("  Changes published: {}", summary.changes_published);
    if summary.failures > 0 {
        println!("  Errors reported: {}", summary.failures);
    }
}
