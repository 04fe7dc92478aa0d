use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Default indent width in spaces
pub const DEFAULT_JSON_INDENT: usize = 2;

/// JsonFormatter adapter rendering pretty JSON
///
/// The indent width comes from the `json_indent` configuration value.
pub struct JsonFormatter {
    indent: Vec<u8>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_JSON_INDENT)
    }

    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: vec![b' '; width],
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, value: &serde_json::Value) -> Result<String> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&self.indent));
        value.serialize(&mut serializer)?;
        buffer.push(b'\n');
        Ok(String::from_utf8(buffer)?)
    }
}
