/// Mock implementations for testing
mod mock_file_reader;
mod mock_logger;
mod mock_process_runner;

pub use mock_file_reader::MockFileReader;
pub use mock_logger::MockLogger;
pub use mock_process_runner::MockProcessRunner;
