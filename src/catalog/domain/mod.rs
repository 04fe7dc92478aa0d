pub mod identifier;
pub mod part;
pub mod profile;
mod scalar;

pub use identifier::{parse_comprised_of, CatalogId, PartReference};
pub use part::{CompositeEntry, LicenseDeclaration, PartRecord, RECORD_FORMAT};
pub use profile::{
    Bug, Cve, LicenseAnalysis, LicensingProfile, ProfileDocument, ProfileHeader, ProfileKind,
    QualityProfile, SecurityProfile,
};
