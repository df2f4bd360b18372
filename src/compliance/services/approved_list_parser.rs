use super::csv_rows;
use crate::compliance::domain::ApprovedList;
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use std::path::Path;

/// ApprovedListParser service - turns approved-dependency file text into an ApprovedList
///
/// Pure parsing; reading the file is the caller's job.
pub struct ApprovedListParser;

impl ApprovedListParser {
    /// Parses `package,license` rows
    ///
    /// # Arguments
    /// * `path` - Where the content came from; becomes the list's source label
    /// * `content` - The file content
    ///
    /// # Errors
    /// Returns `ComplianceError::MalformedRow` for the first row that is not
    /// exactly two fields.
    pub fn parse(path: &Path, content: &str) -> Result<ApprovedList> {
        let rows = csv_rows::read_pairs(content).map_err(|e| ComplianceError::MalformedRow {
            path: path.to_path_buf(),
            line: e.line,
            details: e.details,
        })?;

        Ok(ApprovedList::from_rows(path.display().to_string(), rows))
    }
}
