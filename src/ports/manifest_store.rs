use crate::domain::{AppError, ProjectManifest};

/// Port owning the manifest's on-disk representation.
pub trait ManifestStore {
    /// True iff the manifest file is present at the fixed path.
    fn exists(&self) -> bool;

    /// Parse the manifest, defaulting absent optional fields.
    ///
    /// Fails with `CorruptManifest` when the file exists but is not
    /// well-formed.
    fn load(&self) -> Result<ProjectManifest, AppError>;

    /// Serialize and overwrite the manifest file. Write errors propagate;
    /// there are no retries.
    fn persist(&self, manifest: &ProjectManifest) -> Result<(), AppError>;
}
