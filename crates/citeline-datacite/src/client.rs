//! DataCite REST API client

use citeline_core::{ApiError, get_json, http_client, join_url};

use crate::schema::{DatasetRecord, SearchPage};

/// Public DataCite REST API
pub const DEFAULT_BASE_URL: &str = "https://api.datacite.org";

/// Resource type filter applied to every search
const RESOURCE_TYPE: &str = "dataset";

/// JSON:API media type DataCite answers with
const ACCEPT: &str = "application/vnd.api+json";

/// Dataset search client for one DataCite endpoint
#[derive(Debug, Clone)]
pub struct DataCiteClient {
    base_url: String,
}

impl Default for DataCiteClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl DataCiteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single page (1-based) of dataset hits.
    pub fn fetch_page(
        &self,
        query: &str,
        page_size: usize,
        page_number: usize,
    ) -> Result<Vec<DatasetRecord>, ApiError> {
        let url = join_url(&self.base_url, "dois");
        log::debug!("GET {url} query={query:?} page={page_number} size={page_size}");
        let size = page_size.to_string();
        let number = page_number.to_string();
        let request = http_client()
            .get(&url)
            .query(&[
                ("query", query),
                ("resource-type-id", RESOURCE_TYPE),
                ("page[size]", size.as_str()),
                ("page[number]", number.as_str()),
            ])
            .header(reqwest::header::ACCEPT, ACCEPT);
        let page: SearchPage = get_json(request)?;
        Ok(page.into_records())
    }

    /// Retrieve up to `max_pages` pages of datasets matching `query`.
    ///
    /// Stops early on the first empty page. A non-success status ends the
    /// retrieval and keeps whatever earlier pages returned; transport and
    /// decode failures are returned to the caller.
    pub fn retrieve(
        &self,
        query: &str,
        page_size: usize,
        max_pages: usize,
    ) -> Result<Vec<DatasetRecord>, ApiError> {
        let mut all = Vec::new();
        for page_number in 1..=max_pages {
            match self.fetch_page(query, page_size, page_number) {
                Ok(records) if records.is_empty() => break,
                Ok(records) => {
                    log::debug!("page {page_number}: {} datasets", records.len());
                    all.extend(records);
                }
                Err(e @ ApiError::Http { status: Some(_), .. }) => {
                    log::warn!(
                        "Failed to retrieve datasets for query: {query}, Status code: {}",
                        e.status_label()
                    );
                    log::debug!("{e}");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(all)
    }
}
