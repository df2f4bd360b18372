use super::{AcceptedIgnore, ComplianceReport, ValidationFailure};
use crate::shared::error::ExitCode;

/// Result of a license check that ran to completion
///
/// Hard failures (missing files, failing tools) travel through the error
/// channel instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseCheckOutcome {
    Compliant(ComplianceReport),
    Discrepancies(ComplianceReport),
}

impl LicenseCheckOutcome {
    pub fn from_report(report: ComplianceReport) -> Self {
        if report.has_discrepancies() {
            Self::Discrepancies(report)
        } else {
            Self::Compliant(report)
        }
    }

    pub fn report(&self) -> &ComplianceReport {
        match self {
            Self::Compliant(report) | Self::Discrepancies(report) => report,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Compliant(_) => ExitCode::Success,
            Self::Discrepancies(_) => ExitCode::LicenseDiscrepancies,
        }
    }
}

/// Result of validating an ignore file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreCheckOutcome {
    /// Every entry is valid
    Valid(Vec<AcceptedIgnore>),
    /// Validation stopped at `failure`; `accepted` holds the entries before it
    Invalid {
        accepted: Vec<AcceptedIgnore>,
        failure: ValidationFailure,
    },
}

impl IgnoreCheckOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn accepted(&self) -> &[AcceptedIgnore] {
        match self {
            Self::Valid(accepted) | Self::Invalid { accepted, .. } => accepted,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_valid() {
            ExitCode::Success
        } else {
            ExitCode::InvalidIgnoreEntries
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::ExtraPackage;

    #[test]
    fn test_from_report_compliant() {
        let outcome = LicenseCheckOutcome::from_report(ComplianceReport::default());
        assert!(matches!(outcome, LicenseCheckOutcome::Compliant(_)));
        assert_eq!(outcome.exit_code().as_i32(), 0);
    }

    #[test]
    fn test_from_report_discrepancies() {
        let report = ComplianceReport {
            extra: vec![ExtraPackage {
                package: "leftpad".to_string(),
                license: "WTFPL".to_string(),
            }],
            ..Default::default()
        };
        let outcome = LicenseCheckOutcome::from_report(report);
        assert!(matches!(outcome, LicenseCheckOutcome::Discrepancies(_)));
        assert_eq!(outcome.exit_code().as_i32(), 2);
        assert_eq!(outcome.report().extra.len(), 1);
    }

    #[test]
    fn test_ignore_outcome_exit_codes() {
        assert_eq!(IgnoreCheckOutcome::Valid(vec![]).exit_code().as_i32(), 0);
        let invalid = IgnoreCheckOutcome::Invalid {
            accepted: vec![],
            failure: ValidationFailure::ReasonNotFound,
        };
        assert!(!invalid.is_valid());
        assert_eq!(invalid.exit_code().as_i32(), 1);
    }
}
