pub mod ignore_window_policy;

pub use ignore_window_policy::{IgnoreWindowPolicy, WindowVerdict, DEFAULT_WARN_DAYS};
