use crate::ports::outbound::{ComplianceLogger, LogSeverity};
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// StderrLogger adapter writing timestamped log lines to stderr
///
/// Lines look like `2024-06-15 09:12:01,337 CRITICAL <message>`. The
/// severity label is colored only when `colored` is set, which by default
/// means stderr is a terminal; CI logs stay plain.
#[derive(Debug, Clone, Copy)]
pub struct StderrLogger {
    colored: bool,
}

impl StderrLogger {
    pub fn new() -> Self {
        Self {
            colored: std::io::stderr().is_terminal(),
        }
    }

    pub fn with_color(colored: bool) -> Self {
        Self { colored }
    }

    fn format_line(&self, severity: LogSeverity, message: &str, at: DateTime<Local>) -> String {
        format!(
            "{} {} {}",
            at.format(TIMESTAMP_FORMAT),
            self.label(severity),
            message
        )
    }

    fn label(&self, severity: LogSeverity) -> String {
        let label = severity.label();
        if !self.colored {
            return label.to_string();
        }
        match severity {
            LogSeverity::Info => label.green().to_string(),
            LogSeverity::Warning => label.yellow().to_string(),
            LogSeverity::Critical => label.red().bold().to_string(),
            LogSeverity::Fatal => label.bright_red().bold().to_string(),
        }
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplianceLogger for StderrLogger {
    fn log(&self, severity: LogSeverity, message: &str) {
        eprintln!("{}", self.format_line(severity, message, Local::now()));
    }
}
