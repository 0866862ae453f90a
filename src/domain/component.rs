use std::fmt;
use std::path::{Component, Path};

use crate::domain::AppError;

/// Validated component name: a single path segment, alphanumeric with hyphens.
///
/// Names become file stems under `components/ui/`, so anything that could
/// escape that folder is rejected before any filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::InvalidComponentName(raw.to_string()))
        }
    }

    fn is_valid(raw: &str) -> bool {
        !raw.is_empty()
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && Path::new(raw).components().all(|c| matches!(c, Component::Normal(_)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
