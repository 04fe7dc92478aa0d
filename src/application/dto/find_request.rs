use crate::catalog::domain::{CatalogId, ProfileKind};

/// What a `find` command looks up
#[derive(Debug, Clone, PartialEq)]
pub enum FindRequest {
    /// Free-text search over archive names
    Text(String),
    Id(CatalogId),
    Sha256(String),
    Fvc(String),
    Profile { kind: ProfileKind, id: CatalogId },
}

/// Which record `export part` fetches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartLookup {
    Id(CatalogId),
    Sha256(String),
    Fvc(String),
}

impl PartLookup {
    /// Lookup key and value for messages
    pub fn describe(&self) -> String {
        match self {
            PartLookup::Id(id) => format!("catalog_id \"{}\"", id),
            PartLookup::Sha256(sha256) => format!("sha256 \"{}\"", sha256),
            PartLookup::Fvc(fvc) => format!("fvc \"{}\"", fvc),
        }
    }
}

/// What `export template` writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateKind {
    Part,
    Profile(ProfileKind),
}
