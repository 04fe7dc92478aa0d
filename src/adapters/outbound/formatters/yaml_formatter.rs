use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// YamlFormatter adapter rendering results in record-file syntax
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for YamlFormatter {
    fn format(&self, value: &serde_json::Value) -> Result<String> {
        Ok(serde_yaml_ng::to_string(value)?)
    }
}
