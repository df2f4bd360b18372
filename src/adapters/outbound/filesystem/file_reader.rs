use crate::ports::outbound::TextFileReader;
use crate::shared::error::ComplianceError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the approved list and the ignore file
///
/// Every failure, including the safety checks, surfaces as a configuration
/// error: the check cannot start without its input file.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn hint_for(path: &Path, file_description: &str) -> String {
        format!(
            "The {} is read from \"{}\" relative to the working directory. Run from the repository root, or point to the file with a command-line option or the config file.",
            file_description,
            path.display()
        )
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileReader for FileSystemReader {
    fn read_text(&self, path: &Path, file_description: &str) -> Result<String> {
        if !path.exists() {
            return Err(ComplianceError::Configuration {
                path: path.to_path_buf(),
                details: format!("{} does not exist", file_description),
                hint: Self::hint_for(path, file_description),
            }
            .into());
        }

        validate_input_file(path, file_description)
            .and_then(|()| fs::read_to_string(path).map_err(Into::into))
            .map_err(|e| {
                ComplianceError::Configuration {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                    hint: Self::hint_for(path, file_description),
                }
                .into()
            })
    }
}
