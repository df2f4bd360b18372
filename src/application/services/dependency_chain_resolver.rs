use crate::compliance::domain::DependencyChain;
use crate::ports::outbound::DependencyGraphOracle;
use crate::shared::error::ComplianceError;
use crate::shared::Result;

/// Default limit on graph queries per chain
pub const DEFAULT_MAX_HOPS: usize = 50;

const DIRECT_DEPENDENCY_MARKER: &str = "direct dependency";

/// DependencyChainResolver - explains why a package is installed
///
/// Walks the reverse-dependency graph one query at a time, from the target
/// package up to the first package the graph tool reports as a direct
/// dependency. The walk is bounded: graph tools can print cyclic trees, and a
/// silently truncated chain would point at the wrong root cause.
pub struct DependencyChainResolver<G> {
    oracle: G,
    max_hops: usize,
}

impl<G: DependencyGraphOracle> DependencyChainResolver<G> {
    pub fn new(oracle: G) -> Self {
        Self {
            oracle,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Resolves the chain from a direct dependency down to `package`
    ///
    /// # Returns
    /// The chain, root-most package first and `package` last
    ///
    /// # Errors
    /// - Any error of the graph oracle, unchanged
    /// - `ComplianceError::UnparsableOracleOutput` if an answer has no parent name
    /// - `ComplianceError::ResolutionLimitExceeded` after `max_hops` queries
    ///   without reaching a direct dependency
    pub fn resolve(&self, package: &str) -> Result<DependencyChain> {
        let mut chain = DependencyChain::new(package);
        let mut current = package.to_string();

        for _ in 0..self.max_hops {
            let answer = self.oracle.query(&current)?;

            if answer.contains(DIRECT_DEPENDENCY_MARKER) {
                return Ok(chain);
            }

            let parent = answer
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().next())
                .ok_or_else(|| ComplianceError::UnparsableOracleOutput {
                    command: self.oracle.describe_query(&current),
                    details: format!(
                        "expected a parent package name or '{}' on the first line",
                        DIRECT_DEPENDENCY_MARKER
                    ),
                })?
                .to_string();

            chain.prepend(parent.clone());
            current = parent;
        }

        Err(ComplianceError::ResolutionLimitExceeded {
            package: package.to_string(),
            max_hops: self.max_hops,
            partial_chain: chain.to_string(),
        }
        .into())
    }
}
