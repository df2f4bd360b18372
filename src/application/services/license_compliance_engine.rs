use super::DependencyChainResolver;
use crate::compliance::domain::{ApprovedList, ComplianceReport, Inventory};
use crate::compliance::services::LicenseDiffer;
use crate::ports::outbound::{ComplianceLogger, DependencyGraphOracle};
use crate::shared::Result;

/// LicenseComplianceEngine - diffs the inventory against the approved list
///
/// Logs every finding as it is made and attaches a dependency chain to each
/// package with an unapproved license. Findings never abort the run; only
/// resolver errors do.
pub struct LicenseComplianceEngine<G, L> {
    resolver: DependencyChainResolver<G>,
    logger: L,
}

impl<G, L> LicenseComplianceEngine<G, L>
where
    G: DependencyGraphOracle,
    L: ComplianceLogger,
{
    pub fn new(resolver: DependencyChainResolver<G>, logger: L) -> Self {
        Self { resolver, logger }
    }

    /// Runs the comparison
    ///
    /// Order of reporting: packages missing from the approved list, then
    /// unapproved licenses with their chains, then approved packages that
    /// are not installed (informational).
    ///
    /// # Errors
    /// Returns an error if a dependency chain cannot be resolved; no partial
    /// report is produced in that case.
    pub fn run(&self, approved: &ApprovedList, inventory: &Inventory) -> Result<ComplianceReport> {
        let diff = LicenseDiffer::diff(approved, inventory);

        for extra in &diff.extra {
            self.logger
                .critical(&format!("{} is not in {}", extra.package, approved.source()));
            self.logger
                .critical(&format!("  └── Add to file: {} ", extra.suggested_row()));
        }

        let mut mismatched = Vec::with_capacity(diff.unapproved.len());
        for unapproved in diff.unapproved {
            self.logger.critical(&format!(
                "{} uses {} this differs from approved licenses ({}).",
                unapproved.package,
                unapproved.license,
                unapproved.approved_licenses.join(",")
            ));

            let chain = self.resolver.resolve(&unapproved.package)?;
            self.logger
                .critical(&format!("  └── Dependency chain: {}", chain));

            mismatched.push(unapproved.with_chain(chain));
        }

        for package in &diff.missing {
            self.logger.info(&format!(
                "{} missing in current dependencies; {}.",
                package,
                approved.source()
            ));
        }

        Ok(ComplianceReport {
            extra: diff.extra,
            mismatched,
            missing: diff.missing,
        })
    }
}
