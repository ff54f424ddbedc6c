use std::fs;
use std::path::Path;
use std::process::Command;

use repo_scaffolder::{
    Console, Failure, HostingError, Registry, RepositoryHost, RepositoryRecord, RunSummary,
    Runner, ScaffolderConfig,
};
use tempfile::TempDir;

/// In-memory host answering with a predictable clone URL.
#[derive(Default)]
struct FakeHost {
    reject: bool,
}

impl RepositoryHost for FakeHost {
    async fn create_repository(
        &self,
        name: &str,
        _description: &str,
    ) -> Result<String, HostingError> {
        if self.reject {
            return Err(HostingError::MissingCloneUrl {
                name: name.to_string(),
            });
        }
        Ok(format!("https://github.com/tester/{name}.git"))
    }
}

fn test_config(workspace: &Path) -> ScaffolderConfig {
    ScaffolderConfig {
        registry_path: workspace.join("repositories.json"),
        workspace_dir: workspace.to_path_buf(),
        interpreter: "sh".to_string(),
        ..ScaffolderConfig::default()
    }
}

async fn run_session(
    runner: &Runner<FakeHost>,
    input: &str,
) -> (Result<RunSummary, Failure>, String, Option<String>) {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let result = runner.run(&mut console).await;
    let next_line = console.read_line().await.unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output, next_line)
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

fn init_git_project(project: &Path) {
    git(project, &["init"]);
    git(project, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(project, &["config", "user.email", "tester@example.com"]);
    git(project, &["config", "user.name", "Tester"]);
    git(project, &["config", "commit.gpgsign", "false"]);
}

#[test]
fn missing_registry_loads_empty() {
    let temp = TempDir::new().unwrap();
    let registry = Registry::new(temp.path().join("repositories.json"));

    assert!(registry.load().unwrap().is_empty());
}

#[tokio::test]
async fn update_without_repositories_returns_to_menu() {
    let temp = TempDir::new().unwrap();
    let runner = Runner::new(test_config(temp.path()), FakeHost::default());

    let (result, output, _) = run_session(&runner, "2\n3\n").await;

    let summary = result.unwrap();
    assert_eq!(summary, RunSummary::default());
    assert!(output.contains("No repositories found. Please create a repository first."));
    assert!(output.contains("Exiting."));
}

#[tokio::test]
async fn create_repository_scaffolds_and_registers() {
    let temp = TempDir::new().unwrap();
    let runner = Runner::new(test_config(temp.path()), FakeHost::default());

    let (result, output, _) = run_session(&runner, "1\ndemo\nx\n3\n").await;

    let summary = result.unwrap();
    assert_eq!(summary.repositories_created, 1);
    assert!(output.contains("Repository setup complete."));

    let root = temp.path().join("demo");
    for dir in ["src", "tests", "docs"] {
        assert!(root.join(dir).is_dir(), "missing {dir}");
    }
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert_eq!(readme.lines().next(), Some("# demo"));

    let records = runner.registry().load().unwrap();
    assert_eq!(
        records,
        [RepositoryRecord {
            name: "demo".to_string(),
            description: "x".to_string(),
            path: fs::canonicalize(&root).unwrap().display().to_string(),
            clone_url: "https://github.com/tester/demo.git".to_string(),
        }]
    );
}

#[tokio::test]
async fn host_failure_ends_session_without_local_changes() {
    let temp = TempDir::new().unwrap();
    let host = FakeHost { reject: true };
    let runner = Runner::new(test_config(temp.path()), host);

    let (result, _, next_line) = run_session(&runner, "1\ndemo\nx\n3\n").await;

    assert!(result.unwrap_err().is_fatal());
    assert_eq!(next_line.as_deref(), Some("3"));
    assert!(!temp.path().join("demo").exists());
    assert!(!temp.path().join("repositories.json").exists());
}

#[tokio::test]
async fn scaffold_failure_names_orphaned_remote() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("demo"), "in the way").unwrap();
    let runner = Runner::new(test_config(temp.path()), FakeHost::default());

    let (result, _, _) = run_session(&runner, "1\ndemo\nx\n3\n").await;

    let failure = result.unwrap_err();
    assert!(failure.is_fatal());
    assert!(failure
        .message()
        .contains("https://github.com/tester/demo.git"));
    assert!(runner.registry().load().unwrap().is_empty());
}

#[tokio::test]
async fn registry_failure_names_orphaned_remote_and_project() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    fs::write(&config.registry_path, "garbage").unwrap();
    let runner = Runner::new(config, FakeHost::default());

    let (result, _, next_line) = run_session(&runner, "1\ndemo\nx\n3\n").await;

    let failure = result.unwrap_err();
    assert!(failure.is_fatal());
    assert!(failure.message().contains("Failed to parse registry"));
    assert!(failure
        .message()
        .contains("https://github.com/tester/demo.git"));
    let root = fs::canonicalize(temp.path().join("demo")).unwrap();
    assert!(failure.message().contains(&root.display().to_string()));
    assert_eq!(next_line.as_deref(), Some("3"));
    assert_eq!(
        fs::read_to_string(temp.path().join("repositories.json")).unwrap(),
        "garbage"
    );
}

#[tokio::test]
async fn failing_script_is_not_published() {
    let temp = TempDir::new().unwrap();
    let runner = Runner::new(test_config(temp.path()), FakeHost::default());

    // The project is not a git repository, so reaching the publisher would be fatal.
    let (result, output, _) =
        run_session(&runner, "1\ndemo\nx\n2\n1\necho boom >&2\nexit 1\nEOF\n3\n").await;

    let summary = result.unwrap();
    assert_eq!(summary.scripts_failed, 1);
    assert_eq!(summary.changes_published, 0);
    assert!(output.contains("Script failed to run. Error:\nboom"));
    assert!(output.contains("Script failed testing. Please fix the issues before pushing."));
    assert!(output.contains("Exiting."));

    let script = fs::read_to_string(temp.path().join("demo/src/main.py")).unwrap();
    assert_eq!(script, "echo boom >&2\nexit 1");
}

#[tokio::test]
async fn script_write_failure_is_recoverable() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    Registry::new(&config.registry_path)
        .save(RepositoryRecord {
            name: "gone".to_string(),
            description: String::new(),
            path: temp.path().join("gone").display().to_string(),
            clone_url: "https://github.com/tester/gone.git".to_string(),
        })
        .unwrap();
    let runner = Runner::new(config, FakeHost::default());

    let (result, output, _) = run_session(&runner, "2\n1\nexit 0\nEOF\n3\n").await;

    let summary = result.unwrap();
    assert_eq!(summary.failures, 1);
    assert_eq!(summary.scripts_updated, 0);
    assert!(output.contains("Failed to add or update the script"));
    assert!(output.contains("Exiting."));
}

#[tokio::test]
async fn invalid_choices_return_to_menu() {
    let temp = TempDir::new().unwrap();
    let runner = Runner::new(test_config(temp.path()), FakeHost::default());

    let (result, output, _) = run_session(&runner, "1\ndemo\n\n7\n2\nfive\n2\n9\n3\n").await;

    let summary = result.unwrap();
    assert_eq!(summary.repositories_created, 1);
    assert_eq!(summary.scripts_updated, 0);
    assert!(output.contains("Invalid option. Please try again."));
    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
}

#[tokio::test]
async fn closed_input_ends_session() {
    let temp = TempDir::new().unwrap();
    let runner = Runner::new(test_config(temp.path()), FakeHost::default());

    let (result, _, _) = run_session(&runner, "").await;
    assert_eq!(result.unwrap(), RunSummary::default());

    let (result, _, _) = run_session(&runner, "1\ndemo").await;
    assert!(result.unwrap_err().is_fatal());
}

#[tokio::test]
async fn passing_script_is_committed_and_failed_push_is_fatal() {
    let temp = TempDir::new().unwrap();
    let runner = Runner::new(test_config(temp.path()), FakeHost::default());
    let (result, _, _) = run_session(&runner, "1\ndemo\nx\n3\n").await;
    result.unwrap();
    let project = temp.path().join("demo");
    init_git_project(&project);

    // No `origin` remote exists, so add and commit succeed and push fails.
    let (result, output, next_line) = run_session(&runner, "2\n1\nexit 0\nEOF\n3\n").await;

    let failure = result.unwrap_err();
    assert!(failure.is_fatal());
    assert!(failure.message().contains("git push failed"));
    assert!(output.contains("Script ran successfully!"));
    assert!(!output.contains("Exiting."));
    assert_eq!(next_line.as_deref(), Some("3"));
    assert_eq!(
        git(&project, &["log", "-1", "--format=%s"]),
        "Update script"
    );
}

#[tokio::test]
async fn passing_script_is_pushed_to_origin() {
    let temp = TempDir::new().unwrap();
    let runner = Runner::new(test_config(temp.path()), FakeHost::default());
    let (result, _, _) = run_session(&runner, "1\ndemo\nx\n3\n").await;
    result.unwrap();

    let project = temp.path().join("demo");
    let remote = temp.path().join("remote.git");
    git(temp.path(), &["init", "--bare", "remote.git"]);
    init_git_project(&project);
    git(
        &project,
        &["remote", "add", "origin", &remote.display().to_string()],
    );

    let (result, output, _) =
        run_session(&runner, "2\n1\necho published\nexit 0\nEOF\n3\n").await;

    let summary = result.unwrap();
    assert_eq!(summary.changes_published, 1);
    assert!(output.contains("published\nScript ran successfully!"));
    assert!(output.contains("Changes pushed to GitHub successfully."));
    assert_eq!(
        git(&remote, &["log", "-1", "--format=%s", "main"]),
        "Update script"
    );
    assert_eq!(
        git(&remote, &["show", "main:src/main.py"]),
        "echo published\nexit 0"
    );
}
