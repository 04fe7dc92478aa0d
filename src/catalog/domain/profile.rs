use super::part::RECORD_FORMAT;
use super::scalar::scalar_text;
use serde::{Deserialize, Serialize};

/// Discriminant of a profile document.
///
/// Known kinds are decoded into their concrete schema; anything else is kept
/// as `Other` and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    Security,
    Quality,
    Licensing,
    Other(String),
}

impl ProfileKind {
    pub fn as_str(&self) -> &str {
        match self {
            ProfileKind::Security => "security",
            ProfileKind::Quality => "quality",
            ProfileKind::Licensing => "licensing",
            ProfileKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for ProfileKind {
    fn from(value: &str) -> Self {
        match value {
            "security" => ProfileKind::Security,
            "quality" => ProfileKind::Quality,
            "licensing" => ProfileKind::Licensing,
            other => ProfileKind::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields shared by every profile record: the discriminant plus the
/// reference to the owning part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileHeader {
    pub profile: String,
    pub format: f64,
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(deserialize_with = "scalar_text")]
    pub version: String,
    #[serde(deserialize_with = "scalar_text")]
    pub fvc: String,
    #[serde(deserialize_with = "scalar_text")]
    pub sha256: String,
    #[serde(deserialize_with = "scalar_text")]
    pub catalog_id: String,
}

impl ProfileHeader {
    /// Keys owned by the header; everything else is the document body
    pub const FIELDS: [&'static str; 7] = [
        "profile",
        "format",
        "name",
        "version",
        "fvc",
        "sha256",
        "catalog_id",
    ];

    pub fn template(kind: &ProfileKind) -> Self {
        Self {
            profile: kind.as_str().to_string(),
            format: RECORD_FORMAT,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> ProfileKind {
        ProfileKind::from(self.profile.as_str())
    }

    pub fn display_name(&self) -> String {
        if self.version.is_empty() {
            self.name.clone()
        } else {
            format!("{}-{}", self.name, self.version)
        }
    }
}

/// Security profile element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cve {
    pub cve_id: String,
    pub description: String,
    pub status: String,
    pub date: String,
    pub comments: String,
    pub link: String,
    pub references: Vec<String>,
}

/// Quality profile element, structurally parallel to [`Cve`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bug {
    pub name: String,
    pub id: String,
    pub description: String,
    pub status: String,
    pub level: String,
    pub date: String,
    pub link: String,
    pub comments: String,
    pub references: Vec<String>,
}

/// Licensing profile element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseAnalysis {
    pub license_expression: String,
    pub analysis_type: String,
    pub comments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityProfile {
    pub cve_list: Vec<Cve>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityProfile {
    pub bug_list: Vec<Bug>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicensingProfile {
    pub license_analysis: Vec<LicenseAnalysis>,
    pub copyrights: Vec<String>,
    pub legal_notice: String,
    pub other_legal_notices: Vec<String>,
}

/// Body of a profile, dispatched on the header's discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileDocument {
    Security(SecurityProfile),
    Quality(QualityProfile),
    Licensing(LicensingProfile),
    /// Unrecognized kind; the body is carried verbatim
    Opaque {
        kind: String,
        body: serde_json::Value,
    },
}

impl ProfileDocument {
    pub fn kind(&self) -> ProfileKind {
        match self {
            ProfileDocument::Security(_) => ProfileKind::Security,
            ProfileDocument::Quality(_) => ProfileKind::Quality,
            ProfileDocument::Licensing(_) => ProfileKind::Licensing,
            ProfileDocument::Opaque { kind, .. } => ProfileKind::Other(kind.clone()),
        }
    }

    /// Body with a single empty entry, for `export template <kind>`.
    /// Returns `None` for kinds without a known schema.
    pub fn template(kind: &ProfileKind) -> Option<Self> {
        match kind {
            ProfileKind::Security => Some(ProfileDocument::Security(SecurityProfile {
                cve_list: vec![Cve::default()],
            })),
            ProfileKind::Quality => Some(ProfileDocument::Quality(QualityProfile {
                bug_list: vec![Bug::default()],
            })),
            ProfileKind::Licensing => Some(ProfileDocument::Licensing(LicensingProfile {
                license_analysis: vec![LicenseAnalysis::default()],
                ..LicensingProfile::default()
            })),
            ProfileKind::Other(_) => None,
        }
    }

    /// Body as the fields of a YAML profile record
    ///
    /// # Errors
    /// Returns an error if the body cannot be represented as JSON.
    pub fn to_record_fields(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            ProfileDocument::Security(profile) => serde_json::to_value(profile),
            ProfileDocument::Quality(profile) => serde_json::to_value(profile),
            ProfileDocument::Licensing(profile) => serde_json::to_value(profile),
            ProfileDocument::Opaque { body, .. } => Ok(body.clone()),
        }
    }
}
