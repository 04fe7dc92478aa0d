//! ccli - command-line client for the Software Parts Catalog
//!
//! This library translates catalog commands (add, update, set, delete, find,
//! export, query, upload, ping) into typed GraphQL calls, converting between
//! the human-editable YAML record format and the catalog's wire schema.
//! It follows a hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Catalog core** (`catalog`): record model, identifier resolution,
//!   record mapping and profile dispatch
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error and result types
//!
//! # Example
//!
//! ```no_run
//! use ccli::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let client = GraphQlCatalogClient::new("http://localhost:3050/api/graphql", false)?;
//! let use_case = AddPartUseCase::new(
//!     FileSystemReader::new(),
//!     client,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let report = use_case.execute(Path::new("openssl-1.1.1n.yml")).await?;
//! println!("created {}", report.catalog_id());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, YamlFormatter};
    pub use crate::adapters::outbound::network::{
        GraphQlArchiveUploader, GraphQlCatalogClient, HttpServerProbe,
    };
    pub use crate::application::dto::{
        FindRequest, FollowUp, MutationReport, OutputFormat, PartLookup, TemplateKind, UpdateMode,
    };
    pub use crate::application::use_cases::{
        render_template, AddPartUseCase, AddProfileUseCase, DeletePartUseCase, ExportUseCase,
        FindUseCase, PingUseCase, QueryUseCase, UpdatePartUseCase, UploadArchiveUseCase,
    };
    pub use crate::catalog::domain::{
        CatalogId, PartRecord, PartReference, ProfileDocument, ProfileKind,
    };
    pub use crate::catalog::services::{IdentifierResolver, ProfileDispatcher};
    pub use crate::ports::outbound::{
        ArchiveUploader, CatalogClient, DocumentFormatter, OutputPresenter, ProgressReporter,
        RecordReader, ServerProbe,
    };
    pub use crate::shared::{CatalogError, CatalogResult, Result};
}
