use crate::ports::outbound::{CommandLine, LicenseInventoryOracle, ProcessRunner};
use crate::shared::Result;

/// Default inventory command: pip-licenses in header-less CSV mode
pub const DEFAULT_INVENTORY_COMMAND: &[&str] = &["pip-licenses", "--format=csv", "--no-version"];

/// CommandLicenseInventory adapter - inventory from an external CSV-printing tool
pub struct CommandLicenseInventory<R> {
    runner: R,
    command: CommandLine,
}

impl<R: ProcessRunner> CommandLicenseInventory<R> {
    pub fn new(runner: R, command: CommandLine) -> Self {
        Self { runner, command }
    }

    /// Uses `pip-licenses --format=csv --no-version`
    pub fn pip_licenses(runner: R) -> Self {
        Self::new(
            runner,
            CommandLine::new(DEFAULT_INVENTORY_COMMAND[0], DEFAULT_INVENTORY_COMMAND[1..].iter().copied()),
        )
    }

    pub fn command(&self) -> &CommandLine {
        &self.command
    }
}

impl<R: ProcessRunner> LicenseInventoryOracle for CommandLicenseInventory<R> {
    fn source_description(&self) -> String {
        self.command.to_string()
    }

    fn fetch_inventory_text(&self) -> Result<String> {
        Ok(self.runner.run(&self.command)?.stdout)
    }
}
