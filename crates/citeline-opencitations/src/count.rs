//! Citation-count response shapes and their normalization.
//!
//! The index answers with `[{"count": "3"}]`, but an empty list, a bare
//! number, or `null` also occur. Everything collapses to one `u64` here.

use serde::Deserialize;

/// A count as the upstream spells it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CountValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// One object of the list-shaped response
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct CountEntry {
    #[serde(default)]
    pub count: Option<CountValue>,
}

/// Body of `GET /citation-count/{doi}`; `null` deserializes as `None`
/// around this type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CountResponse {
    Entries(Vec<CountEntry>),
    Scalar(CountValue),
}

impl CountValue {
    /// Non-negative integer value; unparseable text counts as 0.
    pub fn as_count(&self) -> u64 {
        match self {
            Self::Integer(n) => (*n).max(0) as u64,
            Self::Float(f) if f.is_finite() && *f > 0.0 => f.trunc() as u64,
            Self::Float(_) => 0,
            Self::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => n.max(0) as u64,
                Err(_) => {
                    log::warn!("Unparseable citation count {s:?}, using 0");
                    0
                }
            },
        }
    }
}

impl CountResponse {
    /// Collapse any response shape to a citation count.
    ///
    /// Only the first list entry is consulted.
    pub fn normalize(&self) -> u64 {
        match self {
            Self::Entries(entries) => entries
                .first()
                .and_then(|e| e.count.as_ref())
                .map_or(0, CountValue::as_count),
            Self::Scalar(value) => value.as_count(),
        }
    }
}

/// Normalize a possibly-null response body.
pub fn normalize_count(response: Option<&CountResponse>) -> u64 {
    response.map_or(0, CountResponse::normalize)
}
