//! Report records as written to the output file

use citeline_opencitations::CitationDetail;
use citeline_scopus::AbstractInfo;
use serde::{Deserialize, Serialize};

/// One citing work: the four index fields followed by its enrichment.
///
/// Serialized flat, so every entry carries `doi`, `creation`,
/// `journal_sc`, `author_sc`, `title`, `abstract`, `subject_areas` and
/// `use_dataset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRecord {
    #[serde(flatten)]
    pub detail: CitationDetail,
    #[serde(flatten)]
    pub info: AbstractInfo,
}

impl CitationRecord {
    pub fn new(detail: CitationDetail, info: AbstractInfo) -> Self {
        Self { detail, info }
    }
}

/// A reported dataset with its citing works in upstream order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub doi: String,
    pub citation_count: u64,
    pub citations: Vec<CitationRecord>,
}
