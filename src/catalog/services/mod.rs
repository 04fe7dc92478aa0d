pub mod profile_dispatcher;
pub mod record_mapper;
pub mod resolver;

#[cfg(test)]
pub(crate) mod fakes;

pub use profile_dispatcher::{DecodedProfile, ProfileDispatcher};
pub use resolver::IdentifierResolver;
