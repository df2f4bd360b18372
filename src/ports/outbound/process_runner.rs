use crate::shared::Result;
use std::fmt;

/// An external command as program plus arguments, never a shell string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a command from an argv list; `None` if the list is empty
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    /// Replaces `placeholder` inside every argument with `value`
    pub fn substitute(&self, placeholder: &str, value: &str) -> Self {
        Self {
            program: self.program.clone(),
            args: self
                .args
                .iter()
                .map(|arg| arg.replace(placeholder, value))
                .collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured output of a command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// ProcessRunner port for executing external tools
///
/// The license inventory and dependency graph tools are only ever reached
/// through this port, so the checks can run against deterministic fakes.
pub trait ProcessRunner {
    /// Runs the command to completion, blocking until it exits
    ///
    /// # Errors
    /// Returns `ComplianceError::OracleFailure` if the command cannot be
    /// started or exits with a non-zero status.
    fn run(&self, command: &CommandLine) -> Result<CommandOutput>;
}
