/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the compliance checks need from the outside
/// world: files, external tools, and a place to log.
pub mod compliance_logger;
pub mod dependency_graph_oracle;
pub mod license_inventory_oracle;
pub mod process_runner;
pub mod report_writer;
pub mod text_file_reader;

pub use compliance_logger::{ComplianceLogger, LogSeverity};
pub use dependency_graph_oracle::DependencyGraphOracle;
pub use license_inventory_oracle::LicenseInventoryOracle;
pub use process_runner::{CommandLine, CommandOutput, ProcessRunner};
pub use report_writer::ReportWriter;
pub use text_file_reader::TextFileReader;
