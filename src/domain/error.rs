use std::io;

use thiserror::Error;

/// Library-wide error type for simple-ui operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Manifest file exists but is not well-formed.
    #[error("simple-ui.json is corrupt: {details}")]
    CorruptManifest { details: String },

    /// No template with the requested name in the embedded catalog.
    #[error("Component \"{0}\" not found in templates")]
    TemplateNotFound(String),

    /// Component name is not a valid single path segment.
    #[error("Invalid component name '{0}': must be alphanumeric with hyphens")]
    InvalidComponentName(String),
}

impl AppError {
    pub(crate) fn corrupt_manifest<S: Into<String>>(details: S) -> Self {
        AppError::CorruptManifest { details: details.into() }
    }
}
