use std::fmt;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Info,
    Warning,
    Critical,
    Fatal,
}

impl LogSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Info => "INFO",
            LogSeverity::Warning => "WARNING",
            LogSeverity::Critical => "CRITICAL",
            LogSeverity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ComplianceLogger port for the human-readable audit log
///
/// The log is the only user-visible output besides the exit code. Each
/// component receives its own logger instance instead of reaching for
/// process-wide state, so tests can capture exactly what a component said.
pub trait ComplianceLogger {
    /// Writes one log line
    ///
    /// # Arguments
    /// * `severity` - How serious the message is
    /// * `message` - The message, without trailing newline
    fn log(&self, severity: LogSeverity, message: &str);

    fn info(&self, message: &str) {
        self.log(LogSeverity::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogSeverity::Warning, message);
    }

    /// Findings that fail the check
    fn critical(&self, message: &str) {
        self.log(LogSeverity::Critical, message);
    }

    /// Errors that abort the run
    fn fatal(&self, message: &str) {
        self.log(LogSeverity::Fatal, message);
    }
}

impl<T: ComplianceLogger + ?Sized> ComplianceLogger for &T {
    fn log(&self, severity: LogSeverity, message: &str) {
        (**self).log(severity, message);
    }
}
