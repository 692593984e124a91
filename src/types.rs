//! Shared helpers used across the codebase

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a JSON scalar as text. Numbers and booleans keep their literal
/// form; null, arrays and objects become an empty string.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// `deserialize_with` helper: any JSON value as text.
pub fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value))
}

/// `deserialize_with` helper: any JSON value as text, with `null` as `None`.
pub fn optional_cell_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(text_of(&other)),
    })
}
