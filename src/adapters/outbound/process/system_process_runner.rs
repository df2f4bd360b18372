use crate::ports::outbound::{CommandLine, CommandOutput, ComplianceLogger, ProcessRunner};
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use std::process::{Command, Stdio};

/// SystemProcessRunner adapter executing commands with `std::process`
///
/// Commands run directly, without a shell, with stdin closed. Every command
/// is logged before it starts.
#[derive(Debug, Clone)]
pub struct SystemProcessRunner<L> {
    logger: L,
}

impl<L: ComplianceLogger> SystemProcessRunner<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }
}

impl<L: ComplianceLogger> ProcessRunner for SystemProcessRunner<L> {
    fn run(&self, command: &CommandLine) -> Result<CommandOutput> {
        self.logger.info(&format!("Running: {}", command));

        let output = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ComplianceError::OracleFailure {
                command: command.to_string(),
                status: "failed to start".to_string(),
                output: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let captured = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(ComplianceError::OracleFailure {
                command: command.to_string(),
                status: output.status.to_string(),
                output: captured.to_string(),
            }
            .into());
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
