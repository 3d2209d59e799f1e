//! Shared testing utilities for armada CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `armada` binary within the
    /// working directory. Ambient credentials are stripped so tests control
    /// the environment completely.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("armada").expect("Failed to locate armada binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("GITHUB_TOKEN")
            .env_remove("ARMADA_PACKAGER")
            .env_remove("GH_USERNAME")
            .env_remove("GIT_EMAIL");
        cmd
    }

    /// Write a file under the working directory, creating parents.
    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
