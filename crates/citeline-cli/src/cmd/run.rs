//! `citeline run` - build the citation report for one query

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use citeline_core::SharedProgress;
use citeline_report::Pipeline;

use crate::config::{Config, SCOPUS_KEY_VAR};

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Search query (prompted on stdin when omitted)
    pub query: Option<String>,

    /// Output directory for the report file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of DataCite pages to fetch
    #[arg(long)]
    pub pages: Option<usize>,
}

pub fn run(args: RunArgs, config: &Config, progress: &SharedProgress) -> Result<()> {
    let query = super::resolve_query(args.query)?;

    let mut report = config.report_config();
    if let Some(output) = args.output {
        report.output_dir = output;
    }
    if let Some(pages) = args.pages {
        report.max_pages = pages;
    }
    report.validate()?;

    let sources = config.sources();
    if !sources.scopus.has_api_key() {
        log::warn!("{SCOPUS_KEY_VAR} not set; citing works will be reported as \"Not found\"");
    }

    let summary = Pipeline::new(sources, report).run(&query, progress)?;
    summary.log();
    Ok(())
}
