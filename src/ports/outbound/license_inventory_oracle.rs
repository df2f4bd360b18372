use crate::compliance::domain::Inventory;
use crate::compliance::services::InventoryParser;
use crate::shared::Result;

/// LicenseInventoryOracle port for the installed-package license inventory
///
/// Implementations wrap an external license detection tool that prints
/// header-less `package,license` CSV.
pub trait LicenseInventoryOracle {
    /// Human-readable description of the source, used in error messages
    fn source_description(&self) -> String;

    /// Fetches the raw inventory text
    ///
    /// # Errors
    /// Returns an error if the detection tool fails
    fn fetch_inventory_text(&self) -> Result<String>;

    /// Fetches and parses the inventory
    ///
    /// # Errors
    /// Returns an error if the tool fails or prints a row that is not
    /// exactly two fields
    fn fetch_inventory(&self) -> Result<Inventory> {
        let text = self.fetch_inventory_text()?;
        InventoryParser::parse(&self.source_description(), &text)
    }
}

impl<T: LicenseInventoryOracle + ?Sized> LicenseInventoryOracle for &T {
    fn source_description(&self) -> String {
        (**self).source_description()
    }

    fn fetch_inventory_text(&self) -> Result<String> {
        (**self).fetch_inventory_text()
    }
}
