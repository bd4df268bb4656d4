/// Mock implementations for testing
mod mock_catalog_source;
mod mock_progress_reporter;

pub use mock_catalog_source::MockCatalogSource;
pub use mock_progress_reporter::MockProgressReporter;
