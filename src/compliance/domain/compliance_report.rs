use super::DependencyChain;
use crate::shared::error::ExitCode;
use serde::Serialize;

/// A package found in the inventory that has no row in the approved list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraPackage {
    pub package: String,
    pub license: String,
}

impl ExtraPackage {
    /// The row to add to the approved-dependency file to accept this package
    pub fn suggested_row(&self) -> String {
        format!("\"{}\",\"{}\"", self.package, self.license)
    }
}

/// An approved package whose detected license is not among its approved ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseMismatch {
    pub package: String,
    pub license: String,
    pub approved_licenses: Vec<String>,
    pub dependency_chain: DependencyChain,
}

/// ComplianceReport - aggregated result of one license check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    pub extra: Vec<ExtraPackage>,
    pub mismatched: Vec<LicenseMismatch>,
    /// Approved packages not currently installed; informational only
    pub missing: Vec<String>,
}

impl ComplianceReport {
    /// Missing packages never count as discrepancies
    pub fn has_discrepancies(&self) -> bool {
        !self.extra.is_empty() || !self.mismatched.is_empty()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.has_discrepancies() {
            ExitCode::LicenseDiscrepancies
        } else {
            ExitCode::Success
        }
    }

    pub fn to_json(&self) -> crate::shared::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
