//! Abstract Retrieval response shape and the extracted enrichment

use citeline_core::de::{lenient, lenient_text};
use serde::{Deserialize, Serialize};

/// Placeholder for scalars the upstream did not provide
pub const NOT_FOUND: &str = "Not found";

// === Row structs (deserialized from JSON) ===

#[derive(Debug, Deserialize, Default)]
pub struct AbstractResponse {
    #[serde(rename = "abstracts-retrieval-response", default, deserialize_with = "lenient")]
    pub item: Option<RetrievalItem>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RetrievalItem {
    #[serde(default, deserialize_with = "lenient")]
    pub coredata: Option<CoreData>,
    #[serde(rename = "subject-areas", default, deserialize_with = "lenient")]
    pub subject_areas: Option<SubjectAreas>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CoreData {
    #[serde(rename = "dc:title", default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(rename = "dc:description", default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SubjectAreas {
    #[serde(rename = "subject-area", default, deserialize_with = "lenient")]
    pub subject_area: Option<OneOrMany<SubjectArea>>,
}

/// Subject area node; the label sits in the `$` text key
#[derive(Debug, Deserialize, Default)]
pub struct SubjectArea {
    #[serde(rename = "$", default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
}

/// Scopus collapses single-element arrays into a bare object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(v) => v,
            Self::One(t) => vec![t],
        }
    }
}

// === Enrichment ===

/// Title, abstract and subject areas of a citing work.
///
/// `use_dataset` is always empty; it is left for manual annotation of
/// how the citing work uses the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractInfo {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub subject_areas: Vec<String>,
    pub use_dataset: String,
}

impl AbstractInfo {
    /// Fully defaulted info used when the lookup fails.
    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND.to_string(),
            abstract_text: NOT_FOUND.to_string(),
            subject_areas: Vec::new(),
            use_dataset: String::new(),
        }
    }
}

impl Default for AbstractInfo {
    fn default() -> Self {
        Self::not_found()
    }
}

impl From<AbstractResponse> for AbstractInfo {
    fn from(response: AbstractResponse) -> Self {
        let item = response.item.unwrap_or_default();
        let core = item.coredata.unwrap_or_default();
        let subject_areas = item
            .subject_areas
            .and_then(|s| s.subject_area)
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.text.unwrap_or_else(|| NOT_FOUND.to_string()))
            .collect();
        Self {
            title: core.title.unwrap_or_else(|| NOT_FOUND.to_string()),
            abstract_text: core.description.unwrap_or_else(|| NOT_FOUND.to_string()),
            subject_areas,
            use_dataset: String::new(),
        }
    }
}
