//! DataCite JSON:API response shapes and the flattened dataset record

use citeline_core::de::{lenient, lenient_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// === Row structs (deserialized from JSON) ===

/// One page of `GET /dois` results
#[derive(Debug, Deserialize, Default)]
pub struct SearchPage {
    /// Hits on this page; absent or `null` on an empty page. Kept raw so
    /// one malformed hit cannot fail the page.
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<Vec<Value>>,
}

/// Single DOI resource
#[derive(Debug, Deserialize, Default)]
pub struct DoiResource {
    #[serde(default, deserialize_with = "lenient")]
    pub attributes: Option<Attributes>,
}

/// Subset of DOI attributes used downstream
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(default, deserialize_with = "lenient_text")]
    pub doi: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub titles: Option<Vec<Title>>,

    /// Plain string, or `{"name": ...}` when the publisher object is requested
    #[serde(default)]
    pub publisher: Value,

    /// Usually an integer, occasionally a string
    #[serde(default)]
    pub publication_year: Value,
}

#[derive(Debug, Deserialize, Default)]
pub struct Title {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
}

// === Flattened record ===

/// Dataset hit as carried through the pipeline.
///
/// Missing upstream fields are empty strings; a record with an empty
/// `doi` is skipped by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DatasetRecord {
    pub doi: String,
    pub title: String,
    pub publisher: String,
    #[serde(rename = "publicationYear")]
    pub publication_year: String,
}

impl SearchPage {
    /// Flatten all hits into records, preserving upstream order.
    ///
    /// A hit that is not an object becomes an empty record, which the
    /// orchestrator later skips for its missing DOI.
    pub fn into_records(self) -> Vec<DatasetRecord> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(|hit| {
                let resource = serde_json::from_value::<DoiResource>(hit).unwrap_or_else(|e| {
                    log::debug!("Malformed DataCite hit: {e}");
                    DoiResource::default()
                });
                DatasetRecord::from(resource)
            })
            .collect()
    }
}

impl From<DoiResource> for DatasetRecord {
    fn from(resource: DoiResource) -> Self {
        let attrs = resource.attributes.unwrap_or_default();
        let title = attrs
            .titles
            .and_then(|titles| titles.into_iter().next())
            .and_then(|t| t.title)
            .unwrap_or_default();
        Self {
            doi: attrs.doi.unwrap_or_default(),
            title,
            publisher: scalar_text(&attrs.publisher),
            publication_year: scalar_text(&attrs.publication_year),
        }
    }
}

/// Render a loosely-typed scalar as text ("" for null or unknown shapes).
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}
