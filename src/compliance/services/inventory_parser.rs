use super::csv_rows;
use crate::compliance::domain::{Inventory, InventoryRecord};
use crate::shared::error::ComplianceError;
use crate::shared::Result;

/// InventoryParser service - turns license inventory tool output into an Inventory
pub struct InventoryParser;

impl InventoryParser {
    /// Parses header-less `package,license` CSV
    ///
    /// # Arguments
    /// * `command` - The command that produced the output, for error messages
    /// * `output` - The captured stdout
    ///
    /// # Errors
    /// Returns `ComplianceError::UnparsableOracleOutput` if a row is not
    /// exactly two fields.
    pub fn parse(command: &str, output: &str) -> Result<Inventory> {
        let rows =
            csv_rows::read_pairs(output).map_err(|e| ComplianceError::UnparsableOracleOutput {
                command: command.to_string(),
                details: format!("line {}: {}", e.line, e.details),
            })?;

        Ok(Inventory::from_records(
            rows.into_iter()
                .map(|(package, license)| InventoryRecord::new(package, license)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_output() {
        let output = "\"requests\",\"Apache Software License\"\n\"urllib3\",\"MIT License\"\n";
        let inventory = InventoryParser::parse("pip-licenses", output).unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.license_of("requests"), Some("Apache Software License"));
        assert_eq!(inventory.license_of("urllib3"), Some("MIT License"));
    }

    #[test]
    fn test_parse_duplicate_last_wins() {
        let inventory = InventoryParser::parse("tool", "a,MIT\na,BSD\n").unwrap();
        assert_eq!(inventory.license_of("a"), Some("BSD"));
    }

    #[test]
    fn test_parse_bad_row_is_oracle_error() {
        let err = InventoryParser::parse("pip-licenses --format=csv", "a,MIT\nnot-a-row\n")
            .unwrap_err();
        match err.downcast_ref::<ComplianceError>() {
            Some(ComplianceError::UnparsableOracleOutput { command, details }) => {
                assert_eq!(command, "pip-licenses --format=csv");
                assert!(details.starts_with("line 2"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
