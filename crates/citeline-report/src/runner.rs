//! Pipeline orchestration for one query

use std::path::PathBuf;
use std::time::{Duration, Instant};

use citeline_core::ProgressContext;
use citeline_datacite::{DataCiteClient, DatasetRecord};
use citeline_opencitations::OpenCitationsClient;
use citeline_scopus::ScopusClient;

use crate::config::ReportConfig;
use crate::output::{output_path, write_report};
use crate::record::{CitationRecord, EnrichedRecord};

/// The three upstream APIs a report is assembled from
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub datacite: DataCiteClient,
    pub opencitations: OpenCitationsClient,
    pub scopus: ScopusClient,
}

/// What happened to one retrieved dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOutcome {
    /// Record carried no DOI
    MissingDoi,
    /// Citation count outside the configured window
    Filtered { count: u64 },
    /// Kept and enriched
    Enriched(EnrichedRecord),
}

/// Sequential report pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    sources: Sources,
    config: ReportConfig,
}

impl Pipeline {
    pub fn new(sources: Sources, config: ReportConfig) -> Self {
        Self { sources, config }
    }

    /// Run the report for `query` and write its JSON file.
    ///
    /// A failed dataset retrieval is reported and ends the run without a
    /// file; every later per-dataset failure is absorbed with defaults.
    /// Only failing to write the report is returned as an error.
    pub fn run(&self, query: &str, progress: &ProgressContext) -> anyhow::Result<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary::new(query);

        let datasets = match self.sources.datacite.retrieve(
            query,
            self.config.page_size,
            self.config.max_pages,
        ) {
            Ok(datasets) => datasets,
            Err(e) => {
                log::error!("An error occurred while retrieving datasets for '{query}': {e}");
                summary.elapsed = start.elapsed();
                return Ok(summary);
            }
        };

        summary.datasets_found = datasets.len();
        if datasets.is_empty() {
            progress.println("No datasets found for the given query.");
            summary.elapsed = start.elapsed();
            return Ok(summary);
        }
        progress.println(format!(
            "Found {} datasets for query: '{query}'",
            datasets.len()
        ));

        let total = datasets.len();
        let pb = progress.item_bar("Processing Datasets", total);
        let mut records = Vec::new();
        for (idx, dataset) in datasets.iter().enumerate() {
            pb.set_message(dataset.doi.clone());
            match self.process_dataset(dataset) {
                DatasetOutcome::MissingDoi => {
                    log::debug!("[{}/{total}] skipped: no DOI", idx + 1);
                    summary.skipped_no_doi += 1;
                }
                DatasetOutcome::Filtered { count } => {
                    log::debug!(
                        "[{}/{total}] {}: {count} citations, outside window",
                        idx + 1,
                        dataset.doi
                    );
                    summary.filtered_out += 1;
                }
                DatasetOutcome::Enriched(record) => {
                    log::info!(
                        "[{}/{total}] {}: {} citations, {} enriched",
                        idx + 1,
                        record.doi,
                        record.citation_count,
                        record.citations.len()
                    );
                    summary.add_record(&record);
                    records.push(record);
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        let path = output_path(&self.config.output_dir, query);
        write_report(&path, &records)?;
        progress.println(format!("Enriched data saved to {}", path.display()));

        summary.output = Some(path);
        summary.elapsed = start.elapsed();
        Ok(summary)
    }

    /// Count, filter and enrich a single dataset.
    pub fn process_dataset(&self, dataset: &DatasetRecord) -> DatasetOutcome {
        let doi = dataset.doi.as_str();
        if doi.is_empty() {
            return DatasetOutcome::MissingDoi;
        }

        let count = self.sources.opencitations.count(doi);
        if !self.config.window.contains(count) {
            return DatasetOutcome::Filtered { count };
        }

        let citations = self
            .sources
            .opencitations
            .details(doi)
            .into_iter()
            .map(|detail| {
                let info = self.sources.scopus.enrich_or_default(&detail.doi);
                CitationRecord::new(detail, info)
            })
            .collect();

        DatasetOutcome::Enriched(EnrichedRecord {
            doi: doi.to_string(),
            citation_count: count,
            citations,
        })
    }
}

/// Summary of one report run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub query: String,
    pub datasets_found: usize,
    pub skipped_no_doi: usize,
    pub filtered_out: usize,
    pub records_written: usize,
    pub citations: usize,
    /// Citations whose Scopus lookup produced a title
    pub abstracts_found: usize,
    pub elapsed: Duration,
    /// Report file, if one was written
    pub output: Option<PathBuf>,
}

impl RunSummary {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            datasets_found: 0,
            skipped_no_doi: 0,
            filtered_out: 0,
            records_written: 0,
            citations: 0,
            abstracts_found: 0,
            elapsed: Duration::ZERO,
            output: None,
        }
    }

    fn add_record(&mut self, record: &EnrichedRecord) {
        self.records_written += 1;
        self.citations += record.citations.len();
        self.abstracts_found += record
            .citations
            .iter()
            .filter(|c| c.info.title != citeline_scopus::NOT_FOUND)
            .count();
    }

    pub fn log(&self) {
        log::info!("=== Report Summary: '{}' ===", self.query);
        log::info!(
            "Datasets: {} found, {} without DOI, {} outside citation window",
            self.datasets_found,
            self.skipped_no_doi,
            self.filtered_out
        );
        log::info!(
            "Reported: {} datasets, {} citations ({} with abstracts)",
            self.records_written,
            self.citations,
            self.abstracts_found
        );
        log::info!("Time: {:.1}s", self.elapsed.as_secs_f64());
        match &self.output {
            Some(path) => log::info!("Output: {}", path.display()),
            None => log::info!("Output: none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CitationWindow;

    fn offline_pipeline() -> Pipeline {
        let unreachable = "http://127.0.0.1:9";
        Pipeline::new(
            Sources {
                datacite: DataCiteClient::new(unreachable),
                opencitations: OpenCitationsClient::new(unreachable),
                scopus: ScopusClient::new(unreachable, None),
            },
            ReportConfig::default(),
        )
    }

    #[test]
    fn empty_doi_is_skipped_without_requests() {
        let outcome = offline_pipeline().process_dataset(&DatasetRecord::default());
        assert_eq!(outcome, DatasetOutcome::MissingDoi);
    }

    #[test]
    fn unreachable_count_is_filtered_as_zero() {
        let dataset = DatasetRecord {
            doi: "10.1/abc".into(),
            ..Default::default()
        };
        assert_eq!(
            offline_pipeline().process_dataset(&dataset),
            DatasetOutcome::Filtered { count: 0 }
        );
    }

    #[test]
    fn retrieval_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut pipeline = offline_pipeline();
        pipeline.config.output_dir = dir.path().to_path_buf();

        let summary = pipeline
            .run("climate data", &ProgressContext::with_tty(false))
            .expect("retrieval errors are reported, not returned");
        assert_eq!(summary.datasets_found, 0);
        assert!(summary.output.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn summary_counts_abstracts() {
        let mut summary = RunSummary::new("q");
        let found = citeline_scopus::AbstractInfo {
            title: "Real title".into(),
            ..citeline_scopus::AbstractInfo::not_found()
        };
        summary.add_record(&EnrichedRecord {
            doi: "10.1/a".into(),
            citation_count: 2,
            citations: vec![
                CitationRecord::new(Default::default(), found),
                CitationRecord::new(Default::default(), citeline_scopus::AbstractInfo::not_found()),
            ],
        });
        assert_eq!(summary.records_written, 1);
        assert_eq!(summary.citations, 2);
        assert_eq!(summary.abstracts_found, 1);
        summary.log();
    }

    #[test]
    fn custom_window_is_respected() {
        let mut pipeline = offline_pipeline();
        pipeline.config.window = CitationWindow { min: 0, max: 0 };
        let dataset = DatasetRecord {
            doi: "10.1/abc".into(),
            ..Default::default()
        };
        // Count is 0 (unreachable), which this window keeps; details are empty
        match pipeline.process_dataset(&dataset) {
            DatasetOutcome::Enriched(record) => {
                assert_eq!(record.citation_count, 0);
                assert!(record.citations.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
