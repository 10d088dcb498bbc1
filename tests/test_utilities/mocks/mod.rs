/// Mock implementations for testing
mod mock_metadata_source;
mod mock_progress_reporter;

pub use mock_metadata_source::MockMetadataSource;
pub use mock_progress_reporter::MockProgressReporter;
