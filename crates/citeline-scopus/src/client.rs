//! Scopus Abstract Retrieval API client

use citeline_core::{ApiError, get_json, http_client, join_url};

use crate::schema::{AbstractInfo, AbstractResponse};

/// Elsevier content API root
pub const DEFAULT_BASE_URL: &str = "https://api.elsevier.com/content";

const API_KEY_HEADER: &str = "X-ELS-APIKey";

/// Abstract lookups by DOI.
///
/// The API key is handed in by the caller; this type never reads the
/// environment. Without a key requests are still sent and the upstream
/// rejection is absorbed like any other failure.
#[derive(Clone)]
pub struct ScopusClient {
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for ScopusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopusClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Public endpoint without a key; lookups will be rejected upstream
impl Default for ScopusClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

impl ScopusClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up `doi` and extract its enrichment.
    pub fn fetch(&self, doi: &str) -> Result<AbstractInfo, ApiError> {
        let url = join_url(&self.base_url, &format!("abstract/doi/{doi}"));
        log::debug!("GET {url}");
        let mut request = http_client()
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        let response: AbstractResponse = get_json(request)?;
        Ok(AbstractInfo::from(response))
    }

    /// Enrichment for `doi`, or `None` after logging why it failed.
    ///
    /// An empty DOI is not looked up.
    pub fn enrich(&self, doi: &str) -> Option<AbstractInfo> {
        if doi.is_empty() {
            log::debug!("Skipping Scopus lookup for citation without DOI");
            return None;
        }
        match self.fetch(doi) {
            Ok(info) => Some(info),
            Err(e) => {
                log::warn!(
                    "Failed to fetch Scopus info for DOI: {doi}, Status code: {}",
                    e.status_label()
                );
                log::debug!("{e}");
                None
            }
        }
    }

    /// Enrichment for `doi`, defaulted to "Not found" on failure.
    pub fn enrich_or_default(&self, doi: &str) -> AbstractInfo {
        self.enrich(doi).unwrap_or_else(AbstractInfo::not_found)
    }
}
