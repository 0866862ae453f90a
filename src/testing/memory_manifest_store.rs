use std::cell::RefCell;
use std::io;

use crate::domain::{AppError, ProjectManifest};
use crate::ports::ManifestStore;

/// In-memory manifest store for testing.
#[derive(Default)]
pub struct MemoryManifestStore {
    saved: RefCell<Option<ProjectManifest>>,
}

impl MemoryManifestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(manifest: ProjectManifest) -> Self {
        Self { saved: RefCell::new(Some(manifest)) }
    }
}

impl ManifestStore for MemoryManifestStore {
    fn exists(&self) -> bool {
        self.saved.borrow().is_some()
    }

    fn load(&self) -> Result<ProjectManifest, AppError> {
        self.saved
            .borrow()
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no manifest saved").into())
    }

    fn persist(&self, manifest: &ProjectManifest) -> Result<(), AppError> {
        *self.saved.borrow_mut() = Some(manifest.clone());
        Ok(())
    }
}
