//! Shared testing utilities for simple-ui CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated consumer project for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `simple-ui` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("simple-ui").expect("Failed to locate simple-ui binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// True iff the project-relative path exists.
    pub fn exists(&self, rel: &str) -> bool {
        self.work_dir.join(rel).exists()
    }

    /// Read a project file as text.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    /// Write a project file, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.work_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        fs::write(path, content).unwrap_or_else(|e| panic!("failed to write {rel}: {e}"));
    }

    /// Component names recorded in `simple-ui.json`.
    pub fn manifest_components(&self) -> Vec<String> {
        let manifest: serde_json::Value = serde_json::from_str(&self.read("simple-ui.json"))
            .expect("simple-ui.json should be valid JSON");

        manifest["components"]
            .as_array()
            .expect("components should be an array")
            .iter()
            .map(|value| value.as_str().expect("component names are strings").to_string())
            .collect()
    }
}
