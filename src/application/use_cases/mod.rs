/// Use cases - application-specific business logic
///
/// Each use case is one CLI command: it reads its input through a port,
/// runs it through the catalog core and issues the remote calls in order.
mod add_part;
mod add_profile;
mod delete_part;
mod export;
mod find;
mod follow_ups;
mod ping;
mod query;
mod update_part;
mod upload_archive;

pub use add_part::AddPartUseCase;
pub use add_profile::AddProfileUseCase;
pub use delete_part::DeletePartUseCase;
pub use export::{render_template, ExportUseCase};
pub use find::FindUseCase;
pub use ping::PingUseCase;
pub use query::QueryUseCase;
pub use update_part::UpdatePartUseCase;
pub use upload_archive::UploadArchiveUseCase;
