use super::scalar::scalar_text;
use serde::{Deserialize, Serialize};

/// Format version written into every exported record and template
pub const RECORD_FORMAT: f64 = 1.0;

/// License block of a part record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseDeclaration {
    pub license_expression: String,
    pub analysis_type: String,
}

/// One child of a composite (assembly) part.
///
/// Written either as a bare catalog id, in which case the id doubles as the
/// relative path, or as a mapping with an explicit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompositeEntry {
    Bare(String),
    Detailed { catalog_id: String, path: String },
}

impl CompositeEntry {
    pub fn child_id(&self) -> &str {
        match self {
            CompositeEntry::Bare(id) => id,
            CompositeEntry::Detailed { catalog_id, .. } => catalog_id,
        }
    }

    /// Relative path of the child inside the parent; the de-duplication key
    pub fn path(&self) -> &str {
        match self {
            CompositeEntry::Bare(id) => id,
            CompositeEntry::Detailed { path, .. } => path,
        }
    }
}

/// Declarative part record as read from and written to a YAML file.
///
/// Blank strings mean "not supplied"; `size` is kept as text so an unknown
/// size and a zero size both export as an empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartRecord {
    pub format: f64,
    #[serde(deserialize_with = "scalar_text")]
    pub fvc: String,
    #[serde(deserialize_with = "scalar_text")]
    pub sha256: String,
    #[serde(deserialize_with = "scalar_text")]
    pub catalog_id: String,
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(deserialize_with = "scalar_text")]
    pub version: String,
    #[serde(rename = "type")]
    pub part_type: String,
    pub content_type: String,
    pub family_name: String,
    pub label: String,
    pub description: String,
    pub home_page: String,
    pub license: LicenseDeclaration,
    #[serde(deserialize_with = "scalar_text")]
    pub size: String,
    pub aliases: Vec<String>,
    pub comprised_of: String,
    pub composite_list: Vec<CompositeEntry>,
}

impl PartRecord {
    /// Empty record used by `export template part`
    pub fn template() -> Self {
        Self {
            format: RECORD_FORMAT,
            ..Self::default()
        }
    }

    /// Short "name-version" label for messages
    pub fn display_name(&self) -> String {
        match (self.name.is_empty(), self.version.is_empty()) {
            (false, false) => format!("{}-{}", self.name, self.version),
            (false, true) => self.name.clone(),
            _ => "<unnamed part>".to_string(),
        }
    }
}
