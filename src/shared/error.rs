use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let the CI pipeline tell a compliant run apart from
/// findings and from tool failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every check passed
    Success,
    /// At least one ignore entry is malformed, expired, or too far in the future
    InvalidIgnoreEntries,
    /// The user interrupted the run
    Interrupted,
    /// Unexpected or configuration error
    Failure,
    /// At least one package is unapproved or uses an unapproved license
    LicenseDiscrepancies,
    /// An external tool failed or the dependency chain could not be resolved
    ToolFailure,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::InvalidIgnoreEntries | ExitCode::Interrupted | ExitCode::Failure => 1,
            ExitCode::LicenseDiscrepancies | ExitCode::ToolFailure => 2,
        }
    }

    /// Maps an error to the exit code of its category.
    ///
    /// Errors that are not a `ComplianceError` anywhere in their chain map to
    /// the generic `Failure` code.
    pub fn for_error(error: &anyhow::Error) -> Self {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ComplianceError>())
            .map(ComplianceError::exit_code)
            .unwrap_or(ExitCode::Failure)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidIgnoreEntries => write!(f, "Invalid Ignore Entries (1)"),
            ExitCode::Interrupted => write!(f, "Interrupted (1)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::LicenseDiscrepancies => write!(f, "License Discrepancies (2)"),
            ExitCode::ToolFailure => write!(f, "Tool Failure (2)"),
        }
    }
}

/// Hard failures of a compliance check.
///
/// Expected "discrepancy found" results are not errors; they travel as
/// outcomes. Only conditions that make a check impossible to complete
/// end up here.
#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("Configuration error in {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    Configuration {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Malformed row in {path} at line {line}\nDetails: {details}\n\n💡 Hint: Each row must be \"package\",\"license\"")]
    MalformedRow {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("Command failed: {command}\nStatus: {status}\nOutput: {output}")]
    OracleFailure {
        command: String,
        status: String,
        output: String,
    },

    #[error("Unparsable output from command: {command}\nDetails: {details}")]
    UnparsableOracleOutput { command: String, details: String },

    #[error("Dependency chain for {package} did not reach a direct dependency within {max_hops} hops\nPartial chain: {partial_chain}\n\n💡 Hint: The dependency graph tool may be returning cyclic output")]
    ResolutionLimitExceeded {
        package: String,
        max_hops: usize,
        partial_chain: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl ComplianceError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ComplianceError::Configuration { .. }
            | ComplianceError::MalformedRow { .. }
            | ComplianceError::FileWriteError { .. } => ExitCode::Failure,
            ComplianceError::OracleFailure { .. }
            | ComplianceError::UnparsableOracleOutput { .. }
            | ComplianceError::ResolutionLimitExceeded { .. } => ExitCode::ToolFailure,
        }
    }
}
