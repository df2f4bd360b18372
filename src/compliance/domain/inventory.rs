use std::collections::BTreeMap;

/// InventoryRecord value object - one package and its detected license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    package: String,
    license: String,
}

impl InventoryRecord {
    pub fn new(package: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            license: license.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn license(&self) -> &str {
        &self.license
    }
}

/// Inventory of currently installed packages keyed by package name
///
/// When the detection tool reports a package twice, the last record wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    licenses: BTreeMap<String, String>,
}

impl Inventory {
    pub fn from_records(records: impl IntoIterator<Item = InventoryRecord>) -> Self {
        let licenses = records
            .into_iter()
            .map(|record| (record.package, record.license))
            .collect();
        Self { licenses }
    }

    pub fn license_of(&self, package: &str) -> Option<&str> {
        self.licenses.get(package).map(String::as_str)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.licenses.contains_key(package)
    }

    /// Removes a package, returning its license
    pub fn remove(&mut self, package: &str) -> Option<String> {
        self.licenses.remove(package)
    }

    /// `(package, license)` pairs in ascending package order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.licenses
            .iter()
            .map(|(package, license)| (package.as_str(), license.as_str()))
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.licenses.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_record_wins() {
        let inventory = Inventory::from_records(vec![
            InventoryRecord::new("requests", "MIT"),
            InventoryRecord::new("requests", "Apache 2.0"),
        ]);
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.license_of("requests"), Some("Apache 2.0"));
    }

    #[test]
    fn test_remove() {
        let mut inventory = Inventory::from_records(vec![InventoryRecord::new("urllib3", "MIT")]);
        assert_eq!(inventory.remove("urllib3"), Some("MIT".to_string()));
        assert!(inventory.is_empty());
        assert_eq!(inventory.remove("urllib3"), None);
    }

    #[test]
    fn test_iter_is_sorted() {
        let inventory = Inventory::from_records(vec![
            InventoryRecord::new("urllib3", "MIT"),
            InventoryRecord::new("certifi", "MPL-2.0"),
        ]);
        let pairs: Vec<(&str, &str)> = inventory.iter().collect();
        assert_eq!(pairs, vec![("certifi", "MPL-2.0"), ("urllib3", "MIT")]);
    }
}
