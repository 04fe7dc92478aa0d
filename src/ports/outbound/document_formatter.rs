use crate::shared::Result;

/// DocumentFormatter port for rendering command results
///
/// Results are handed over as generic JSON values so one formatter serves
/// parts, search hits, profiles and raw query responses alike.
pub trait DocumentFormatter {
    /// Renders the value, including a trailing newline
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, value: &serde_json::Value) -> Result<String>;
}
