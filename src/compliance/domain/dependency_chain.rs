use serde::Serialize;
use std::fmt;

/// DependencyChain value object
///
/// Ordered path from a directly declared dependency (first) down to the
/// package being explained (last). Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyChain(Vec<String>);

impl DependencyChain {
    /// Starts a chain that only contains the target package
    pub fn new(target: impl Into<String>) -> Self {
        Self(vec![target.into()])
    }

    /// Adds a parent in front of the current root
    pub fn prepend(&mut self, parent: impl Into<String>) {
        self.0.insert(0, parent.into());
    }

    pub fn root(&self) -> &str {
        &self.0[0]
    }

    pub fn target(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    pub fn packages(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for DependencyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}
