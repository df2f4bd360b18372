use std::path::PathBuf;

/// LicenseCheckRequest - Internal request DTO for the license check use case
#[derive(Debug, Clone)]
pub struct LicenseCheckRequest {
    /// Path to the approved-dependency CSV file
    pub approved_file: PathBuf,
    /// Limit on dependency graph queries per resolved chain
    pub max_hops: usize,
}

impl LicenseCheckRequest {
    pub fn new(approved_file: PathBuf, max_hops: usize) -> Self {
        Self {
            approved_file,
            max_hops,
        }
    }
}
