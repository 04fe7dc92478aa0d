use crate::adapters::outbound::formatters::{JsonFormatter, YamlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DocumentFormatter;

/// Factory for creating document formatters
///
/// This factory encapsulates the selection of a formatter implementation
/// for the format the user asked for. It belongs in the application layer
/// as it orchestrates the selection of infrastructure adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `json_indent` - Indent width in spaces, used by the JSON formatter
    pub fn create(format: OutputFormat, json_indent: usize) -> Box<dyn DocumentFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::with_indent(json_indent)),
            OutputFormat::Yaml => Box::new(YamlFormatter::new()),
        }
    }
}
