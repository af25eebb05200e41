//! Citeline Report - per-query citation report pipeline
//!
//! Retrieves datasets from DataCite, keeps the lightly cited ones
//! according to OpenCitations, enriches every citing work from Scopus,
//! and writes the result as one pretty-printed JSON file.
//!
//! # Example
//!
//! ```no_run
//! use citeline_core::ProgressContext;
//! use citeline_report::{Pipeline, ReportConfig, Sources};
//!
//! let pipeline = Pipeline::new(Sources::default(), ReportConfig::default());
//! let summary = pipeline
//!     .run("climate data", &ProgressContext::new())
//!     .expect("write failed");
//! println!("{} datasets kept", summary.records_written);
//! ```

pub mod config;
pub mod output;
pub mod record;
pub mod runner;

// Re-exports for convenience
pub use config::{CitationWindow, ReportConfig};
pub use output::{output_path, write_report};
pub use record::{CitationRecord, EnrichedRecord};
pub use runner::{DatasetOutcome, Pipeline, RunSummary, Sources};
