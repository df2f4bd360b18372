/// Application layer - Use cases, services and DTOs
///
/// This layer orchestrates the compliance domain and reaches the outside
/// world only through ports.
pub mod dto;
pub mod services;
pub mod use_cases;
