use crate::compliance::domain::ApprovedList;
use crate::compliance::services::ApprovedListParser;
use crate::ports::outbound::TextFileReader;
use crate::shared::Result;
use std::path::Path;

/// ApprovedListLoader - reads and parses the approved-dependency file
pub struct ApprovedListLoader<FR> {
    file_reader: FR,
}

impl<FR: TextFileReader> ApprovedListLoader<FR> {
    pub fn new(file_reader: FR) -> Self {
        Self { file_reader }
    }

    /// # Errors
    /// Returns `ComplianceError::Configuration` if the file can't be read, or
    /// `ComplianceError::MalformedRow` if a row isn't exactly two fields
    pub fn load(&self, path: &Path) -> Result<ApprovedList> {
        let content = self.file_reader.read_text(path, "approved list")?;
        ApprovedListParser::parse(path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ComplianceError;
    use std::path::PathBuf;

    struct InMemoryReader(Option<&'static str>);

    impl TextFileReader for InMemoryReader {
        fn read_text(&self, path: &Path, file_description: &str) -> Result<String> {
            self.0.map(str::to_string).ok_or_else(|| {
                ComplianceError::Configuration {
                    path: path.to_path_buf(),
                    details: format!("{} not found", file_description),
                    hint: "create it".to_string(),
                }
                .into()
            })
        }
    }

    #[test]
    fn test_load() {
        let loader = ApprovedListLoader::new(InMemoryReader(Some("a,MIT\na,BSD\n")));
        let list = loader.load(&PathBuf::from(".approved-dep.csv")).unwrap();
        assert_eq!(list.get("a").unwrap().licenses().len(), 2);
        assert_eq!(list.source(), ".approved-dep.csv");
    }

    #[test]
    fn test_load_missing_file() {
        let loader = ApprovedListLoader::new(InMemoryReader(None));
        let err = loader.load(&PathBuf::from(".approved-dep.csv")).unwrap_err();
        assert!(err.to_string().contains("approved list not found"));
    }
}
