use std::collections::BTreeMap;

/// ApprovedEntry value object: one package and every license accepted for it
///
/// Licenses keep the order of the rows they came from; a license listed twice
/// stays listed twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedEntry {
    package: String,
    licenses: Vec<String>,
}

impl ApprovedEntry {
    fn new(package: String) -> Self {
        Self {
            package,
            licenses: Vec::new(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }

    pub fn allows(&self, license: &str) -> bool {
        self.licenses.iter().any(|approved| approved == license)
    }
}

/// ApprovedList aggregate - the organization-curated package/license table
///
/// Built once from the rows of the approved-dependency file and read-only
/// afterwards. `source` is the label of the file it came from and is used in
/// findings ("<pkg> is not in <source>").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedList {
    source: String,
    entries: BTreeMap<String, ApprovedEntry>,
}

impl ApprovedList {
    /// Builds the list from `(package, license)` rows in file order
    pub fn from_rows<I, P, L>(source: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: Into<String>,
    {
        let mut entries: BTreeMap<String, ApprovedEntry> = BTreeMap::new();
        for (package, license) in rows {
            let package = package.into();
            entries
                .entry(package.clone())
                .or_insert_with(|| ApprovedEntry::new(package))
                .licenses
                .push(license.into());
        }
        Self {
            source: source.into(),
            entries,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, package: &str) -> Option<&ApprovedEntry> {
        self.entries.get(package)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    /// Package names in ascending order
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
