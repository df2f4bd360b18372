use crate::compliance::domain::{
    ApprovedList, DependencyChain, ExtraPackage, Inventory, LicenseMismatch,
};

/// A package whose detected license is not approved, before its chain is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnapprovedLicense {
    pub package: String,
    pub license: String,
    pub approved_licenses: Vec<String>,
}

impl UnapprovedLicense {
    pub fn with_chain(self, dependency_chain: DependencyChain) -> LicenseMismatch {
        LicenseMismatch {
            package: self.package,
            license: self.license,
            approved_licenses: self.approved_licenses,
            dependency_chain,
        }
    }
}

/// Classification of every package of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseDiff {
    pub extra: Vec<ExtraPackage>,
    pub unapproved: Vec<UnapprovedLicense>,
    pub missing: Vec<String>,
}

/// LicenseDiffer service - compares the inventory against the approved list
///
/// This is the pure part of the license check: no I/O, no chain resolution.
/// All three lists come out in ascending package order.
pub struct LicenseDiffer;

impl LicenseDiffer {
    /// Classifies packages as extra, unapproved, or missing
    ///
    /// Extra packages are taken out of the comparison before licenses are
    /// checked, so a package is never reported both as extra and as
    /// unapproved.
    pub fn diff(approved: &ApprovedList, inventory: &Inventory) -> LicenseDiff {
        let mut remaining = inventory.clone();

        let extra_packages: Vec<String> = inventory
            .packages()
            .filter(|package| !approved.contains(package))
            .map(str::to_string)
            .collect();

        let extra = extra_packages
            .into_iter()
            .filter_map(|package| {
                remaining
                    .remove(&package)
                    .map(|license| ExtraPackage { package, license })
            })
            .collect();

        let unapproved = remaining
            .iter()
            .filter_map(|(package, license)| {
                let entry = approved.get(package)?;
                if entry.allows(license) {
                    return None;
                }
                Some(UnapprovedLicense {
                    package: package.to_string(),
                    license: license.to_string(),
                    approved_licenses: entry.licenses().to_vec(),
                })
            })
            .collect();

        let missing = approved
            .packages()
            .filter(|package| !remaining.contains(package))
            .map(str::to_string)
            .collect();

        LicenseDiff {
            extra,
            unapproved,
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::InventoryRecord;

    fn approved(rows: &[(&str, &str)]) -> ApprovedList {
        ApprovedList::from_rows(".approved-dep.csv", rows.iter().copied())
    }

    fn inventory(rows: &[(&str, &str)]) -> Inventory {
        Inventory::from_records(rows.iter().map(|(p, l)| InventoryRecord::new(*p, *l)))
    }

    #[test]
    fn test_multi_license_entry_accepts_any_listed_license() {
        let diff = LicenseDiffer::diff(
            &approved(&[("pkgA", "MIT"), ("pkgA", "Apache-2.0")]),
            &inventory(&[("pkgA", "Apache-2.0")]),
        );
        assert_eq!(diff, LicenseDiff::default());
    }

    #[test]
    fn test_unapproved_license() {
        let diff = LicenseDiffer::diff(
            &approved(&[("pkgB", "MIT")]),
            &inventory(&[("pkgB", "GPL-3.0")]),
        );
        assert!(diff.extra.is_empty());
        assert_eq!(
            diff.unapproved,
            vec![UnapprovedLicense {
                package: "pkgB".to_string(),
                license: "GPL-3.0".to_string(),
                approved_licenses: vec!["MIT".to_string()],
            }]
        );
    }

    #[test]
    fn test_extra_package_is_not_also_unapproved() {
        let diff = LicenseDiffer::diff(
            &approved(&[("pkgA", "MIT")]),
            &inventory(&[("pkgA", "MIT"), ("leftpad", "GPL-3.0")]),
        );
        assert_eq!(diff.extra.len(), 1);
        assert_eq!(diff.extra[0].package, "leftpad");
        assert_eq!(diff.extra[0].license, "GPL-3.0");
        assert!(diff.unapproved.is_empty());
        assert!(diff.missing.is_empty());
    }

    #[test]
    fn test_missing_packages() {
        let diff = LicenseDiffer::diff(
            &approved(&[("pkgA", "MIT"), ("old", "BSD")]),
            &inventory(&[("pkgA", "MIT")]),
        );
        assert_eq!(diff.missing, vec!["old".to_string()]);
        assert!(diff.extra.is_empty());
        assert!(diff.unapproved.is_empty());
    }

    #[test]
    fn test_every_package_lands_in_exactly_one_bucket() {
        let approved = approved(&[("a", "MIT"), ("b", "MIT"), ("c", "MIT")]);
        let inventory = inventory(&[("a", "MIT"), ("b", "GPL"), ("x", "MIT"), ("y", "GPL")]);
        let diff = LicenseDiffer::diff(&approved, &inventory);

        let extra: Vec<&str> = diff.extra.iter().map(|e| e.package.as_str()).collect();
        let unapproved: Vec<&str> = diff.unapproved.iter().map(|u| u.package.as_str()).collect();
        assert_eq!(extra, vec!["x", "y"]);
        assert_eq!(unapproved, vec!["b"]);
        assert_eq!(diff.missing, vec!["c".to_string()]);
    }

    #[test]
    fn test_with_chain() {
        let unapproved = UnapprovedLicense {
            package: "pkgB".to_string(),
            license: "GPL-3.0".to_string(),
            approved_licenses: vec!["MIT".to_string()],
        };
        let mismatch = unapproved.with_chain(DependencyChain::new("pkgB"));
        assert_eq!(mismatch.dependency_chain.target(), "pkgB");
        assert_eq!(mismatch.license, "GPL-3.0");
    }
}
