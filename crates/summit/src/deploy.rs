use std::{
    path::{Path, PathBuf},
    process::Command,
};

use chrono::Local;
use tracing::{debug, info};

use crate::errors::DeployError;

/// Commits the site in `docs/` and pushes it, which triggers the GitHub Pages workflow.
///
/// The individual steps are exposed so that callers can confirm with the user in between,
/// e.g. when not on `main`. See [`Deployer::deploy()`] for the usual sequence.
#[derive(Debug)]
pub struct Deployer {
    repo_dir: PathBuf,
    message: String,
}

/// What [`Deployer::deploy()`] did.
#[derive(Debug, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The working tree was clean, nothing was committed.
    NothingToDeploy,
    Pushed { message: String },
}

impl Deployer {
    pub fn new(repo_dir: impl Into<PathBuf>, message: Option<String>) -> Result<Self, DeployError> {
        let repo_dir = repo_dir.into();

        if !repo_dir.join(".git").exists() {
            return Err(DeployError::NotARepository { path: repo_dir });
        }

        let docs_dir = repo_dir.join("docs");
        if !docs_dir.is_dir() {
            return Err(DeployError::MissingDocs { path: docs_dir });
        }

        let message = message
            .unwrap_or_else(|| format!("Update website: {}", Local::now().format("%Y-%m-%d %H:%M")));

        Ok(Self { repo_dir, message })
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn current_branch(&self) -> Result<String, DeployError> {
        Ok(self.git(&["branch", "--show-current"])?.trim().to_string())
    }

    /// Whether the GitHub Pages workflow is installed.
    pub fn has_workflow(&self) -> bool {
        self.repo_dir
            .join(".github")
            .join("workflows")
            .join("gh-pages.yml")
            .is_file()
    }

    /// Paths committed by a deploy: `docs`, plus the workflow directory and root `README.md` when they exist.
    pub fn deploy_paths(&self) -> Vec<&'static str> {
        let mut paths = vec!["docs"];

        for optional in [".github/workflows", "README.md"] {
            if self.repo_dir.join(optional).exists() {
                paths.push(optional);
            } else {
                debug!(target: "deploy", "{} does not exist, deploying without it", optional);
            }
        }

        paths
    }

    /// Returns `git status --porcelain` output for the deploy paths, or `None` if they are clean.
    ///
    /// Changes anywhere else in the repository are ignored, they would not be committed.
    pub fn pending_changes(&self) -> Result<Option<String>, DeployError> {
        let mut args = vec!["status", "--porcelain", "--"];
        args.extend(self.deploy_paths());

        let status = self.git(&args)?;
        if status.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(status))
    }

    /// Stages the deploy paths, returning them.
    pub fn stage(&self) -> Result<Vec<&'static str>, DeployError> {
        let paths = self.deploy_paths();

        let mut args = vec!["add", "--"];
        args.extend(paths.iter().copied());
        self.git(&args)?;

        info!(target: "deploy", "Staged {}", paths.join(", "));
        Ok(paths)
    }

    pub fn commit(&self) -> Result<(), DeployError> {
        self.git(&["commit", "-m", &self.message])?;
        info!(target: "deploy", "Committed changes: {}", self.message);
        Ok(())
    }

    pub fn push(&self) -> Result<(), DeployError> {
        self.git(&["push"])?;
        info!(target: "deploy", "Pushed changes");
        Ok(())
    }

    /// Stages, commits and pushes, unless there is nothing to deploy.
    pub fn deploy(&self) -> Result<DeployOutcome, DeployError> {
        let Some(changes) = self.pending_changes()? else {
            info!(target: "deploy", "No changes to deploy");
            return Ok(DeployOutcome::NothingToDeploy);
        };

        debug!(target: "deploy", "Changes to be deployed:\n{}", changes);

        self.stage()?;
        self.commit()?;
        self.push()?;

        Ok(DeployOutcome::Pushed {
            message: self.message.clone(),
        })
    }

    fn git(&self, args: &[&str]) -> Result<String, DeployError> {
        let command = format!("git {}", args.join(" "));
        debug!(target: "deploy", "Running {}", command);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|source| DeployError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DeployError::CommandFailed {
                command,
                stderr: failure_output(&output.stdout, &output.stderr),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Git reports some failures, such as `nothing to commit`, on stdout.
fn failure_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    if !stderr.trim().is_empty() {
        return stderr.trim().to_string();
    }

    String::from_utf8_lossy(stdout).trim().to_string()
}
