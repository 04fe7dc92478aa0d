/// Formatter adapters for find and query output
mod json_formatter;
mod yaml_formatter;

pub use json_formatter::{JsonFormatter, DEFAULT_JSON_INDENT};
pub use yaml_formatter::YamlFormatter;
