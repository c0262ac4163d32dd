//! Shared testing harness for `tfdirs` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const DIRECTORIES_YML: &str = ".github/terraform-options/directories.yml";
pub(crate) const BRANCH_MODULES_JSON: &str = ".github/terraform-options/branch-modules.json";

/// Testing harness providing an isolated environment for CLI exercises.
///
/// Layout: `<root>/work` is the process working directory, so `<root>` is
/// what the parent-directory candidate (`../<path>`) resolves to.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used as the CLI working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `tfdirs` binary in the work directory.
    ///
    /// Runner variables inherited from the host are cleared.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `tfdirs` binary in a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("tfdirs").expect("Failed to locate tfdirs binary");
        cmd.current_dir(dir.as_ref())
            .env_remove("GITHUB_OUTPUT")
            .env_remove("GITHUB_WORKSPACE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Build a command whose `GITHUB_OUTPUT` points at [`Self::github_output_path`].
    pub(crate) fn cli_with_github_output(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("GITHUB_OUTPUT", self.github_output_path());
        cmd
    }

    pub(crate) fn github_output_path(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    /// Write a file relative to the work directory.
    pub(crate) fn write_config(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.work_dir.join(relative), content)
    }

    /// Write a file relative to the parent of the work directory.
    pub(crate) fn write_parent_config(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.root.path().join(relative), content)
    }

    /// Parse `name=value` lines written to `GITHUB_OUTPUT`.
    pub(crate) fn github_outputs(&self) -> Vec<(String, String)> {
        let content = fs::read_to_string(self.github_output_path()).unwrap_or_default();
        parse_output_lines(&content)
    }

    /// Last value for `name` in `GITHUB_OUTPUT`.
    pub(crate) fn github_output(&self, name: &str) -> Option<String> {
        self.github_outputs().into_iter().rev().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

pub(crate) fn parse_output_lines(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create config directory");
    }
    fs::write(path, content).expect("Failed to write config file");
    path.to_path_buf()
}
