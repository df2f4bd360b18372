//! compliance-gate - CI compliance checks for Python dependency trees
//!
//! This library checks two things a pipeline should not ship without:
//! installed dependency licenses that match an approved list, and
//! vulnerability ignore entries that are documented and time-boxed.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Pure business logic, policies and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use compliance_gate::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let logger = StderrLogger::new();
//! let inventory = CommandLicenseInventory::pip_licenses(SystemProcessRunner::new(logger));
//! let graph = CommandDependencyGraph::poetry(SystemProcessRunner::new(logger));
//!
//! // Create use case
//! let use_case = CheckLicensesUseCase::new(FileSystemReader::new(), inventory, graph, logger);
//!
//! // Execute
//! let request = LicenseCheckRequest::new(PathBuf::from(".approved-dep.csv"), DEFAULT_MAX_HOPS);
//! let outcome = use_case.execute(&request)?;
//! std::process::exit(outcome.exit_code().as_i32())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrLogger;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::process::{
        CommandDependencyGraph, CommandLicenseInventory, SystemProcessRunner,
    };
    pub use crate::application::dto::{IgnoreCheckRequest, LicenseCheckRequest};
    pub use crate::application::services::{
        DependencyChainResolver, LicenseComplianceEngine, DEFAULT_MAX_HOPS,
    };
    pub use crate::application::use_cases::{CheckIgnoreEntriesUseCase, CheckLicensesUseCase};
    pub use crate::compliance::domain::{
        AcceptedIgnore, ApprovedEntry, ApprovedList, ComplianceReport, DependencyChain,
        ExtraPackage, IgnoreCheckOutcome, IgnoreGroup, Inventory, InventoryRecord,
        LicenseCheckOutcome, LicenseMismatch, ValidationFailure,
    };
    pub use crate::compliance::policies::{IgnoreWindowPolicy, DEFAULT_WARN_DAYS};
    pub use crate::compliance::services::{
        ApprovedListParser, IgnoreEntryValidator, IgnoreFileParser, IgnoreGroups,
        InventoryParser, LicenseDiffer,
    };
    pub use crate::ports::outbound::{
        CommandLine, CommandOutput, ComplianceLogger, DependencyGraphOracle,
        LicenseInventoryOracle, LogSeverity, ProcessRunner, ReportWriter, TextFileReader,
    };
    pub use crate::shared::error::{ComplianceError, ExitCode};
    pub use crate::shared::Result;
}
