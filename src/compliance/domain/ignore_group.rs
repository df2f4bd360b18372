use chrono::NaiveDate;
use thiserror::Error;

/// IgnoreGroup - one documented, time-boxed vulnerability suppression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreGroup {
    reason: String,
    until: NaiveDate,
    ids: Vec<String>,
}

impl IgnoreGroup {
    pub fn new(reason: String, until: NaiveDate, ids: Vec<String>) -> Self {
        Self { reason, until, ids }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn until(&self) -> NaiveDate {
        self.until
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Identifiers joined with commas, as they appear in log lines
    pub fn ids_joined(&self) -> String {
        self.ids.join(",")
    }
}

/// An ignore entry that passed validation, kept for the audit log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedIgnore {
    pub group: IgnoreGroup,
    pub remaining_days: i64,
    /// The expiry is within the allowed window but past the recommended one
    pub beyond_recommended: bool,
}

/// Why an ignore entry was rejected
///
/// The Display text is the log line reported for the rejected entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Invalid entry: 'reason:' not found.")]
    ReasonNotFound,

    #[error("Invalid entry: 'until' not found for reason: {reason}.")]
    UntilNotFound { reason: String },

    #[error("Invalid entry: until date '{value}' is not a YYYY-MM-DD date for reason: {reason}.")]
    InvalidUntilDate { reason: String, value: String },

    #[error("Invalid entry: no vulnerability entries for {reason}.")]
    NoIdentifiers { reason: String },

    #[error("{ids} until date should not exceed {max_days} days.")]
    TooFarInFuture { ids: String, max_days: u32 },

    #[error("{ids}. Ignore beyond {until}. Investigate ignores.")]
    Expired { ids: String, until: NaiveDate },
}
