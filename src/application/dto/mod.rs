/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the catalog core isolated.
mod find_request;
mod mutation_report;
mod output_format;
mod update_mode;

pub use find_request::{FindRequest, PartLookup, TemplateKind};
pub use mutation_report::{FollowUp, MutationReport};
pub use output_format::OutputFormat;
pub use update_mode::UpdateMode;
