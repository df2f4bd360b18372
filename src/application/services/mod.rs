/// Application services - compliance logic that needs ports
mod approved_list_loader;
mod dependency_chain_resolver;
mod license_compliance_engine;

pub use approved_list_loader::ApprovedListLoader;
pub use dependency_chain_resolver::{DependencyChainResolver, DEFAULT_MAX_HOPS};
pub use license_compliance_engine::LicenseComplianceEngine;
