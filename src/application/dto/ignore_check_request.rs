use chrono::NaiveDate;
use std::path::PathBuf;

/// IgnoreCheckRequest - Internal request DTO for the ignore entry check use case
#[derive(Debug, Clone)]
pub struct IgnoreCheckRequest {
    /// Path to the suppression file
    pub ignore_file: PathBuf,
    /// Furthest an expiry may lie in the future, in days
    pub max_days: u32,
    /// Recommended furthest expiry; beyond it entries are valid but warned about
    pub warn_days: u32,
    /// The date expiries are measured against
    pub today: NaiveDate,
}

impl IgnoreCheckRequest {
    pub fn new(ignore_file: PathBuf, max_days: u32, warn_days: u32, today: NaiveDate) -> Self {
        Self {
            ignore_file,
            max_days,
            warn_days,
            today,
        }
    }
}
