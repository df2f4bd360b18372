//! Configuration file support for compliance-gate.
//!
//! Provides YAML-based configuration through `compliance-gate.config.yml`
//! files: input file locations, the external tool commands, and resolver and
//! warning thresholds. Command-line flags take precedence over every field.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::process::PACKAGE_PLACEHOLDER;
use crate::ports::outbound::{CommandLine, ComplianceLogger};
use crate::shared::error::ComplianceError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "compliance-gate.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub approved_file: Option<PathBuf>,
    pub ignore_file: Option<PathBuf>,
    /// Argv list of the license inventory tool
    pub inventory_command: Option<Vec<String>>,
    /// Argv list of the dependency graph tool, with a `{package}` placeholder
    pub graph_command: Option<Vec<String>>,
    pub max_hops: Option<usize>,
    pub warn_days: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn inventory_command(&self) -> Option<CommandLine> {
        self.inventory_command
            .as_deref()
            .and_then(CommandLine::from_argv)
    }

    pub fn graph_command(&self) -> Option<CommandLine> {
        self.graph_command.as_deref().and_then(CommandLine::from_argv)
    }
}

fn config_error(path: &Path, details: impl Into<String>, hint: &str) -> anyhow::Error {
    ComplianceError::Configuration {
        path: path.to_path_buf(),
        details: details.into(),
        hint: hint.to_string(),
    }
    .into()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        config_error(
            path,
            format!("Failed to read config file: {}", e),
            "Check that the file exists and is readable.",
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        config_error(
            path,
            format!("Failed to parse config file: {}", e),
            "Ensure the file contains valid YAML syntax.",
        )
    })?;

    validate_config(path, &config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(ref argv) = config.inventory_command {
        if argv.first().map_or(true, |program| program.trim().is_empty()) {
            return Err(config_error(
                path,
                "Invalid config: inventory_command must not be empty.",
                "List the program and its arguments, e.g. [\"pip-licenses\", \"--format=csv\", \"--no-version\"].",
            ));
        }
    }

    if let Some(ref argv) = config.graph_command {
        if argv.first().map_or(true, |program| program.trim().is_empty()) {
            return Err(config_error(
                path,
                "Invalid config: graph_command must not be empty.",
                "List the program and its arguments, e.g. [\"poetry\", \"show\", \"--tree\", \"--why\", \"{package}\", \"--no-ansi\"].",
            ));
        }
        if !argv.iter().skip(1).any(|arg| arg.contains(PACKAGE_PLACEHOLDER)) {
            return Err(config_error(
                path,
                format!(
                    "Invalid config: graph_command has no {} placeholder.",
                    PACKAGE_PLACEHOLDER
                ),
                "The queried package name is substituted into the argument containing {package}.",
            ));
        }
    }

    if config.max_hops == Some(0) {
        return Err(config_error(
            path,
            "Invalid config: max_hops must be at least 1.",
            "Remove the field to use the default of 50.",
        ));
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
pub fn warn_unknown_fields<L: ComplianceLogger>(config: &ConfigFile, logger: &L) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        logger.warning(&format!(
            "Unknown config field '{}' will be ignored.",
            key
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogSeverity;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
approved_file: ci/approved.csv
ignore_file: ci/.trivyignore
inventory_command: ["pip-licenses", "--format=csv", "--no-version", "--python", "/venv/bin/python"]
graph_command:
  - poetry
  - show
  - --tree
  - --why
  - "{package}"
max_hops: 20
warn_days: 14
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.approved_file, Some(PathBuf::from("ci/approved.csv")));
        assert_eq!(config.ignore_file, Some(PathBuf::from("ci/.trivyignore")));
        assert_eq!(
            config.inventory_command().unwrap().to_string(),
            "pip-licenses --format=csv --no-version --python /venv/bin/python"
        );
        assert_eq!(
            config.graph_command().unwrap().to_string(),
            "poetry show --tree --why {package}"
        );
        assert_eq!(config.max_hops, Some(20));
        assert_eq!(config.warn_days, Some(14));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "warn_days: 7\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().warn_days, Some(7));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
        assert!(matches!(
            err.downcast_ref::<ComplianceError>(),
            Some(ComplianceError::Configuration { .. })
        ));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_negative_warn_days_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "warn_days: -3\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_inventory_command_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "inventory_command: []\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("inventory_command must not be empty"));
    }

    #[test]
    fn test_graph_command_without_placeholder_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "graph_command: [\"poetry\", \"show\", \"--tree\"]\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("no {package} placeholder"));
    }

    #[test]
    fn test_placeholder_inside_argument_is_accepted() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "graph_command: [\"pipdeptree\", \"--packages={package}\"]\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.graph_command().is_some());
    }

    #[test]
    fn test_zero_max_hops_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "max_hops: 0\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("max_hops must be at least 1"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        #[derive(Default)]
        struct RecordingLogger(RefCell<Vec<(LogSeverity, String)>>);

        impl ComplianceLogger for RecordingLogger {
            fn log(&self, severity: LogSeverity, message: &str) {
                self.0.borrow_mut().push((severity, message.to_string()));
            }
        }

        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
warn_days: 10
unknown_field: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);

        let logger = RecordingLogger::default();
        warn_unknown_fields(&config, &logger);
        let lines = logger.0.borrow();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, LogSeverity::Warning);
        assert_eq!(
            lines[0].1,
            "Unknown config field 'another_unknown' will be ignored."
        );
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.approved_file.is_none());
        assert!(config.ignore_file.is_none());
        assert!(config.inventory_command().is_none());
        assert!(config.graph_command().is_none());
        assert!(config.max_hops.is_none());
        assert!(config.warn_days.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
