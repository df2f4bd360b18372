/// Console adapters for the audit log
mod stderr_logger;

pub use stderr_logger::StderrLogger;
