use crate::shared::Result;
use std::path::Path;

/// TextFileReader port for reading the approved list and the ignore file
pub trait TextFileReader {
    /// Reads a whole text file
    ///
    /// # Arguments
    /// * `path` - The file to read
    /// * `file_description` - What the file is (e.g. "approved list"), for error messages
    ///
    /// # Errors
    /// Returns `ComplianceError::Configuration` if the file is missing,
    /// unreadable, or fails the safety checks
    fn read_text(&self, path: &Path, file_description: &str) -> Result<String>;
}
