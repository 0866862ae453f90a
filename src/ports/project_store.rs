use crate::domain::AppError;

/// Port for reading and writing files inside the consumer project.
///
/// Paths are project-relative with forward slashes; writes create missing
/// parent directories. Files are rewritten whole, never streamed.
pub trait ProjectStore {
    /// True iff the project-relative path exists.
    fn exists(&self, rel_path: &str) -> bool;

    /// Read a text file, `None` when absent.
    fn read_text(&self, rel_path: &str) -> Result<Option<String>, AppError>;

    /// Write a text file, creating parent directories.
    fn write_text(&self, rel_path: &str, content: &str) -> Result<(), AppError>;

    /// Write raw bytes, creating parent directories.
    fn write_bytes(&self, rel_path: &str, bytes: &[u8]) -> Result<(), AppError>;
}
