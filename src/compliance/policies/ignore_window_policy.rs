use chrono::NaiveDate;

/// Recommended maximum number of days an ignore entry may reach into the future
pub const DEFAULT_WARN_DAYS: u32 = 30;

/// Where an expiry date falls relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVerdict {
    /// Expiry is more than `max_days` away
    TooFarInFuture,
    /// Expiry is strictly before today
    Expired,
    /// Expiry is acceptable
    Within {
        remaining_days: i64,
        beyond_recommended: bool,
    },
}

/// IgnoreWindowPolicy - how far ahead an ignore entry may expire
///
/// Day counts are whole calendar days. An entry expiring today is still
/// valid, with zero days remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreWindowPolicy {
    max_days: u32,
    warn_days: u32,
}

impl IgnoreWindowPolicy {
    pub fn new(max_days: u32) -> Self {
        Self {
            max_days,
            warn_days: DEFAULT_WARN_DAYS,
        }
    }

    /// Sets the recommended window; entries beyond it are valid but flagged
    pub fn with_warn_days(mut self, warn_days: u32) -> Self {
        self.warn_days = warn_days;
        self
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub fn warn_days(&self) -> u32 {
        self.warn_days
    }

    pub fn evaluate(&self, until: NaiveDate, today: NaiveDate) -> WindowVerdict {
        let delta_future = (until - today).num_days();
        let delta_past = (today - until).num_days();

        if delta_future > i64::from(self.max_days) {
            WindowVerdict::TooFarInFuture
        } else if delta_past > 0 {
            WindowVerdict::Expired
        } else {
            WindowVerdict::Within {
                remaining_days: delta_future,
                beyond_recommended: delta_future > i64::from(self.warn_days),
            }
        }
    }
}
