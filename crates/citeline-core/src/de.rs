//! Forgiving field decoders for upstream JSON.
//!
//! Upstream payloads occasionally carry a number where text is expected,
//! or `null`/a list where an object is expected. These helpers turn such
//! fields into `None` (or their text) instead of failing the whole body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a JSON scalar as text; `null` and containers give `None`.
pub fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `deserialize_with` for text fields that may arrive as any scalar.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// `deserialize_with` for nested values: a shape that does not decode as
/// `T` becomes `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
