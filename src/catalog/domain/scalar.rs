use serde::{Deserialize, Deserializer};

/// Reads a text field that YAML may have written as a bare number or flag.
///
/// The scalar is kept exactly as written: `version: 1.10` stays `"1.10"`
/// and a long all-digit `fvc` keeps every digit. `null` reads as empty.
/// Relies on the YAML deserializer handing plain scalars to `String`
/// verbatim, so records must be decoded from their text, not from a
/// parsed `Value`.
pub(crate) fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
