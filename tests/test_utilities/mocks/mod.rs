/// Mock implementations for testing
mod mock_archive_uploader;
mod mock_catalog_client;
mod mock_progress_reporter;

pub use mock_archive_uploader::MockArchiveUploader;
pub use mock_catalog_client::MockCatalogClient;
pub use mock_progress_reporter::MockProgressReporter;
