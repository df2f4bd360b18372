pub mod approved_list;
pub mod compliance_report;
pub mod dependency_chain;
pub mod ignore_group;
pub mod inventory;
pub mod outcome;

pub use approved_list::{ApprovedEntry, ApprovedList};
pub use compliance_report::{ComplianceReport, ExtraPackage, LicenseMismatch};
pub use dependency_chain::DependencyChain;
pub use ignore_group::{AcceptedIgnore, IgnoreGroup, ValidationFailure};
pub use inventory::{Inventory, InventoryRecord};
pub use outcome::{IgnoreCheckOutcome, LicenseCheckOutcome};
