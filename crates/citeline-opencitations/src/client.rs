//! OpenCitations Index API client

use citeline_core::{ApiError, get_json, http_client, join_url};

use crate::citations::{CitationDetail, CitationEntry, into_details};
use crate::count::{CountResponse, normalize_count};

/// OpenCitations Index API v1
pub const DEFAULT_BASE_URL: &str = "https://opencitations.net/index/api/v1";

/// Citation lookups against one OpenCitations endpoint
#[derive(Debug, Clone)]
pub struct OpenCitationsClient {
    base_url: String,
}

impl Default for OpenCitationsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl OpenCitationsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Citation count for `doi`, or the error that prevented reading it.
    pub fn fetch_count(&self, doi: &str) -> Result<u64, ApiError> {
        let url = join_url(&self.base_url, &format!("citation-count/{doi}"));
        log::debug!("GET {url}");
        let response: Option<CountResponse> = get_json(http_client().get(&url))?;
        Ok(normalize_count(response.as_ref()))
    }

    /// Citation count for `doi`; any failure is logged and counts as 0.
    pub fn count(&self, doi: &str) -> u64 {
        self.fetch_count(doi).unwrap_or_else(|e| {
            log::warn!(
                "Failed to fetch citation count for DOI: {doi}, Status code: {}",
                e.status_label()
            );
            log::debug!("{e}");
            0
        })
    }

    /// Works citing `doi`, in upstream order.
    pub fn fetch_details(&self, doi: &str) -> Result<Vec<CitationDetail>, ApiError> {
        let url = join_url(&self.base_url, &format!("citations/{doi}"));
        log::debug!("GET {url}");
        let entries: Option<Vec<CitationEntry>> = get_json(http_client().get(&url))?;
        Ok(into_details(entries.unwrap_or_default()))
    }

    /// Works citing `doi`; any failure is logged and yields no citations.
    pub fn details(&self, doi: &str) -> Vec<CitationDetail> {
        self.fetch_details(doi).unwrap_or_else(|e| {
            log::warn!(
                "Failed to fetch citation details for DOI: {doi}, Status code: {}",
                e.status_label()
            );
            log::debug!("{e}");
            Vec::new()
        })
    }
}
