use crate::shared::Result;

/// ReportWriter port for the machine-readable compliance report
pub trait ReportWriter {
    /// Writes the serialized report to its destination
    ///
    /// # Errors
    /// Returns an error if the destination can't be written
    fn write_report(&self, content: &str) -> Result<()>;
}
