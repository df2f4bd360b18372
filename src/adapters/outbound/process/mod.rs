/// Process adapters - external tools behind the ProcessRunner port
mod command_dependency_graph;
mod command_license_inventory;
mod system_process_runner;

pub use command_dependency_graph::{
    CommandDependencyGraph, DEFAULT_GRAPH_COMMAND, PACKAGE_PLACEHOLDER,
};
pub use command_license_inventory::{CommandLicenseInventory, DEFAULT_INVENTORY_COMMAND};
pub use system_process_runner::SystemProcessRunner;
