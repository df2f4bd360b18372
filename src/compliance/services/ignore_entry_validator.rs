use crate::compliance::domain::{AcceptedIgnore, IgnoreCheckOutcome, IgnoreGroup, ValidationFailure};
use crate::compliance::policies::{IgnoreWindowPolicy, WindowVerdict};
use chrono::NaiveDate;

const REASON_MARKER: &str = "reason:";
const UNTIL_MARKER: &str = "until:";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// IgnoreEntryValidator service - structural and temporal rules for ignore entries
///
/// An entry is three or more lines: a `reason:` line, an `until:` line with a
/// `YYYY-MM-DD` date, then one identifier per line.
pub struct IgnoreEntryValidator {
    policy: IgnoreWindowPolicy,
}

impl IgnoreEntryValidator {
    pub fn new(policy: IgnoreWindowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IgnoreWindowPolicy {
        &self.policy
    }

    /// Validates groups in order, stopping at the first invalid one
    ///
    /// # Arguments
    /// * `groups` - Raw line groups, as produced by `IgnoreFileParser`
    /// * `today` - The date expiries are measured against
    pub fn validate<'a, I>(&self, groups: I, today: NaiveDate) -> IgnoreCheckOutcome
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut accepted = Vec::new();
        for lines in groups {
            match self.check_entry(lines, today) {
                Ok(entry) => accepted.push(entry),
                Err(failure) => return IgnoreCheckOutcome::Invalid { accepted, failure },
            }
        }
        IgnoreCheckOutcome::Valid(accepted)
    }

    /// Validates a single group
    pub fn check_entry(
        &self,
        lines: &[String],
        today: NaiveDate,
    ) -> Result<AcceptedIgnore, ValidationFailure> {
        let group = Self::parse_group(lines)?;

        match self.policy.evaluate(group.until(), today) {
            WindowVerdict::TooFarInFuture => Err(ValidationFailure::TooFarInFuture {
                ids: group.ids_joined(),
                max_days: self.policy.max_days(),
            }),
            WindowVerdict::Expired => Err(ValidationFailure::Expired {
                ids: group.ids_joined(),
                until: group.until(),
            }),
            WindowVerdict::Within {
                remaining_days,
                beyond_recommended,
            } => Ok(AcceptedIgnore {
                group,
                remaining_days,
                beyond_recommended,
            }),
        }
    }

    /// Structural checks only: markers present, date parses, identifiers present
    pub fn parse_group(lines: &[String]) -> Result<IgnoreGroup, ValidationFailure> {
        let reason = lines
            .first()
            .and_then(|line| value_after(line, REASON_MARKER))
            .ok_or(ValidationFailure::ReasonNotFound)?;

        let until_value = lines
            .get(1)
            .and_then(|line| value_after(line, UNTIL_MARKER))
            .ok_or_else(|| ValidationFailure::UntilNotFound {
                reason: reason.clone(),
            })?;

        let until = NaiveDate::parse_from_str(&until_value, DATE_FORMAT).map_err(|_| {
            ValidationFailure::InvalidUntilDate {
                reason: reason.clone(),
                value: until_value.clone(),
            }
        })?;

        let ids: Vec<String> = lines
            .iter()
            .skip(2)
            .map(|line| line.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        if ids.is_empty() {
            return Err(ValidationFailure::NoIdentifiers { reason });
        }

        Ok(IgnoreGroup::new(reason, until, ids))
    }
}

/// Trimmed text following the first occurrence of `marker`
fn value_after(line: &str, marker: &str) -> Option<String> {
    line.find(marker)
        .map(|index| line[index + marker.len()..].trim().to_string())
}
