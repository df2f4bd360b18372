/// Use cases module containing application business logic orchestration
mod check_ignore_entries;
mod check_licenses;

pub use check_ignore_entries::CheckIgnoreEntriesUseCase;
pub use check_licenses::CheckLicensesUseCase;
