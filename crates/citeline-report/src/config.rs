//! Report pipeline configuration

use std::path::PathBuf;

/// DataCite page size used per request
pub const DEFAULT_PAGE_SIZE: usize = 100;
/// Maximum DataCite pages fetched per query
pub const DEFAULT_MAX_PAGES: usize = 3;

/// Inclusive citation-count range a dataset must fall in to be reported.
///
/// The default [1, 9] narrows the report to lightly cited datasets:
/// uncited datasets and anything with 10 or more citations are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CitationWindow {
    pub min: u64,
    pub max: u64,
}

impl Default for CitationWindow {
    fn default() -> Self {
        Self { min: 1, max: 9 }
    }
}

impl CitationWindow {
    pub fn contains(&self, count: u64) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// Runtime configuration for one report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory the `datasets_<query>.json` file is written to
    pub output_dir: PathBuf,
    /// DataCite page size
    pub page_size: usize,
    /// DataCite page limit
    pub max_pages: usize,
    /// Citation counts that keep a dataset in the report
    pub window: CitationWindow,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            window: CitationWindow::default(),
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.page_size > 0, "page_size must be at least 1");
        anyhow::ensure!(self.max_pages > 0, "max_pages must be at least 1");
        anyhow::ensure!(
            self.window.min <= self.window.max,
            "min_citations ({}) exceeds max_citations ({})",
            self.window.min,
            self.window.max
        );
        Ok(())
    }
}
