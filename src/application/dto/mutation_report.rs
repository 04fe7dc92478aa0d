use crate::catalog::domain::CatalogId;
use crate::ports::outbound::RemotePart;

/// A per-item call issued after the primary mutation succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    Alias(String),
    CompositeLink { child: CatalogId, path: String },
}

impl std::fmt::Display for FollowUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FollowUp::Alias(alias) => write!(f, "alias \"{}\"", alias),
            FollowUp::CompositeLink { child, path } => {
                write!(f, "composite child {} at \"{}\"", child, path)
            }
        }
    }
}

/// Outcome of a create/update/set: the part returned by the primary
/// mutation plus every follow-up call that was applied, in order.
///
/// Mutations are not transactional; when a follow-up fails the use case
/// returns an error instead, but everything listed here up to that point
/// stays applied on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationReport {
    pub part: RemotePart,
    pub applied: Vec<FollowUp>,
}

impl MutationReport {
    pub fn new(part: RemotePart) -> Self {
        Self {
            part,
            applied: Vec::new(),
        }
    }

    pub fn catalog_id(&self) -> CatalogId {
        self.part.catalog_id()
    }
}
