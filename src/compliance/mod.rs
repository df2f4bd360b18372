/// Compliance domain - approved lists, inventories, ignore entries and the
/// pure rules that judge them
///
/// Nothing in this layer performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
