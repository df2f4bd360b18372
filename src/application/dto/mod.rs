/// Data Transfer Objects for application layer
///
/// Requests carry everything a use case needs from the CLI and config
/// layers, keeping the use cases free of argument parsing.
mod ignore_check_request;
mod license_check_request;

pub use ignore_check_request::IgnoreCheckRequest;
pub use license_check_request::LicenseCheckRequest;
