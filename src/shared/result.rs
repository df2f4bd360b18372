/// Result alias used across the crate.
///
/// Domain failures are `ComplianceError` values wrapped in `anyhow::Error`,
/// so callers can add context and still recover the category for the exit code.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
