use std::{
    path::{Path, PathBuf},
    process::Command,
};

use tempfile::{TempDir, tempdir};

pub fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A repository on `main` with a committed `README.md`, pushed to a bare `remote.git` next to it.
///
/// Returns the temporary directory, the repository and the remote.
pub fn published_repo() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let remote = dir.path().join("remote.git");
    let repo = dir.path().join("site");
    std::fs::create_dir_all(&repo).unwrap();

    run_git(dir.path(), &["init", "--bare", "remote.git"]);
    run_git(&repo, &["init"]);
    run_git(&repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    run_git(&repo, &["config", "user.name", "Summit Tests"]);
    run_git(&repo, &["config", "user.email", "tests@summit.invalid"]);
    run_git(&repo, &["config", "commit.gpgsign", "false"]);

    std::fs::write(repo.join("README.md"), "# Site\n").unwrap();
    run_git(&repo, &["add", "README.md"]);
    run_git(&repo, &["commit", "-m", "Initial commit"]);
    run_git(&repo, &["remote", "add", "origin", remote.to_str().unwrap()]);
    run_git(&repo, &["push", "-u", "origin", "main"]);

    (dir, repo, remote)
}

/// Commit subjects on the remote's `main`, newest first.
pub fn remote_log(remote: &Path) -> Vec<String> {
    run_git(remote, &["log", "--format=%s", "main"])
        .lines()
        .map(str::to_string)
        .collect()
}
