use std::fs;
use std::path::PathBuf;

use crate::domain::paths::MANIFEST_FILE;
use crate::domain::{AppError, ProjectManifest};
use crate::ports::ManifestStore;

/// JSON-file manifest store rooted at a consumer project directory.
#[derive(Debug, Clone)]
pub struct JsonManifestStore {
    root: PathBuf,
}

impl JsonManifestStore {
    /// Create a store for the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}

impl ManifestStore for JsonManifestStore {
    fn exists(&self) -> bool {
        self.manifest_path().exists()
    }

    fn load(&self) -> Result<ProjectManifest, AppError> {
        let content = fs::read_to_string(self.manifest_path())?;
        serde_json::from_str(&content).map_err(|e| AppError::corrupt_manifest(e.to_string()))
    }

    fn persist(&self, manifest: &ProjectManifest) -> Result<(), AppError> {
        let mut serialized = serde_json::to_string_pretty(manifest)
            .map_err(|e| AppError::corrupt_manifest(e.to_string()))?;
        serialized.push('\n');
        fs::write(self.manifest_path(), serialized)?;
        Ok(())
    }
}
