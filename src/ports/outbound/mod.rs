/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (catalog server, file system, console).
pub mod archive_uploader;
pub mod catalog_client;
pub mod catalog_schema;
pub mod document_formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_reader;
pub mod server_probe;

pub use archive_uploader::ArchiveUploader;
pub use catalog_client::CatalogClient;
pub use catalog_schema::{
    CreatePartInput, DeleteOptions, ProfileEntry, RemoteArchive, RemotePart, SetPartInput,
    UpdatePartInput, UploadReceipt,
};
pub use document_formatter::DocumentFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_reader::RecordReader;
pub use server_probe::ServerProbe;
