use crate::shared::Result;

/// DependencyGraphOracle port for reverse-dependency lookups
///
/// Answers "why is this package installed?" one level at a time. The first
/// line of the answer either contains `direct dependency` or starts with the
/// name of the package that pulls `package` in.
pub trait DependencyGraphOracle {
    /// Human-readable description of the query, used in error messages
    fn describe_query(&self, package: &str) -> String;

    /// Returns the raw answer for `package`
    ///
    /// # Errors
    /// Returns an error if the graph tool fails
    fn query(&self, package: &str) -> Result<String>;
}

impl<T: DependencyGraphOracle + ?Sized> DependencyGraphOracle for &T {
    fn describe_query(&self, package: &str) -> String {
        (**self).describe_query(package)
    }

    fn query(&self, package: &str) -> Result<String> {
        (**self).query(package)
    }
}
