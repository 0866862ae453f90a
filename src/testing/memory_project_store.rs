use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// In-memory project store for testing.
#[derive(Default)]
pub struct MemoryProjectStore {
    files: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file without going through the port.
    pub fn seed(&self, rel_path: &str, content: &str) {
        self.files.borrow_mut().insert(rel_path.to_string(), content.as_bytes().to_vec());
    }

    /// Current text of a file, `None` when absent.
    pub fn text(&self, rel_path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(rel_path)
            .map(|bytes| String::from_utf8(bytes.clone()).expect("test file should be UTF-8"))
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn exists(&self, rel_path: &str) -> bool {
        self.files.borrow().contains_key(rel_path)
    }

    fn read_text(&self, rel_path: &str) -> Result<Option<String>, AppError> {
        Ok(self.text(rel_path))
    }

    fn write_text(&self, rel_path: &str, content: &str) -> Result<(), AppError> {
        self.seed(rel_path, content);
        Ok(())
    }

    fn write_bytes(&self, rel_path: &str, bytes: &[u8]) -> Result<(), AppError> {
        self.files.borrow_mut().insert(rel_path.to_string(), bytes.to_vec());
        Ok(())
    }
}
