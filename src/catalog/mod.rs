/// Catalog core - identifier resolution, record mapping and profile dispatch
///
/// The domain module holds the declarative record model; the services module
/// holds the only logic with real invariants: turning any part reference into
/// a canonical id and translating records to and from the remote schema.
pub mod domain;
pub mod services;
