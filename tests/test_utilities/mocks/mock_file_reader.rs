use compliance_gate::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock TextFileReader serving in-memory files
#[derive(Default)]
pub struct MockFileReader {
    files: HashMap<PathBuf, String>,
}

impl MockFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl TextFileReader for MockFileReader {
    fn read_text(&self, path: &Path, file_description: &str) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            ComplianceError::Configuration {
                path: path.to_path_buf(),
                details: format!("{} does not exist", file_description),
                hint: "mock file system".to_string(),
            }
            .into()
        })
    }
}
