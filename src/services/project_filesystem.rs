use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-backed project store.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store for the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, rel_path: &str) -> PathBuf {
        self.root.join(rel_path)
    }

    fn ensure_parent(&self, rel_path: &str) -> Result<PathBuf, AppError> {
        let path = self.resolve(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(path)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn exists(&self, rel_path: &str) -> bool {
        self.resolve(rel_path).exists()
    }

    fn read_text(&self, rel_path: &str) -> Result<Option<String>, AppError> {
        let path = self.resolve(rel_path);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_text(&self, rel_path: &str, content: &str) -> Result<(), AppError> {
        let path = self.ensure_parent(rel_path)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn write_bytes(&self, rel_path: &str, bytes: &[u8]) -> Result<(), AppError> {
        let path = self.ensure_parent(rel_path)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}
