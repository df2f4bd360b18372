use crate::application::dto::LicenseCheckRequest;
use crate::application::services::{
    ApprovedListLoader, DependencyChainResolver, LicenseComplianceEngine,
};
use crate::compliance::domain::LicenseCheckOutcome;
use crate::ports::outbound::{
    ComplianceLogger, DependencyGraphOracle, LicenseInventoryOracle, TextFileReader,
};
use crate::shared::Result;

/// CheckLicensesUseCase - Core use case for the license compliance gate
///
/// # Type Parameters
/// * `FR` - TextFileReader implementation for the approved list
/// * `INV` - LicenseInventoryOracle implementation
/// * `G` - DependencyGraphOracle implementation
/// * `L` - ComplianceLogger implementation
pub struct CheckLicensesUseCase<FR, INV, G, L> {
    approved_list_loader: ApprovedListLoader<FR>,
    inventory_oracle: INV,
    graph_oracle: G,
    logger: L,
}

impl<FR, INV, G, L> CheckLicensesUseCase<FR, INV, G, L>
where
    FR: TextFileReader,
    INV: LicenseInventoryOracle,
    G: DependencyGraphOracle,
    L: ComplianceLogger,
{
    /// Creates a new CheckLicensesUseCase with injected dependencies
    pub fn new(file_reader: FR, inventory_oracle: INV, graph_oracle: G, logger: L) -> Self {
        Self {
            approved_list_loader: ApprovedListLoader::new(file_reader),
            inventory_oracle,
            graph_oracle,
            logger,
        }
    }

    /// Executes the license check
    ///
    /// # Returns
    /// `Compliant` or `Discrepancies`, both carrying the full report
    ///
    /// # Errors
    /// Configuration errors (approved list), oracle failures, and resolution
    /// errors abort the check.
    pub fn execute(&self, request: &LicenseCheckRequest) -> Result<LicenseCheckOutcome> {
        // Step 1: Load the approved list before touching any external tool
        let approved = self.approved_list_loader.load(&request.approved_file)?;
        self.logger.info(&format!(
            "Loaded {} approved package(s) from {}",
            approved.len(),
            approved.source()
        ));

        // Step 2: Fetch the current inventory
        let inventory = self.inventory_oracle.fetch_inventory()?;
        self.logger
            .info(&format!("Detected {} installed package(s)", inventory.len()));

        // Step 3: Compare, resolving chains on demand
        let resolver =
            DependencyChainResolver::new(&self.graph_oracle).with_max_hops(request.max_hops);
        let engine = LicenseComplianceEngine::new(resolver, &self.logger);
        let report = engine.run(&approved, &inventory)?;

        Ok(LicenseCheckOutcome::from_report(report))
    }
}
