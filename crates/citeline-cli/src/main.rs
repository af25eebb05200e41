//! citeline - citation reports for research datasets
//!
//! Searches DataCite for datasets, keeps the lightly cited ones according
//! to OpenCitations, and enriches their citing works with Scopus metadata.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "citeline")]
#[command(about = "Citation reports for research datasets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./citeline.toml or the user config dir)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the citation report for a query (default)
    Run(cmd::run::RunArgs),
    /// List datasets matching a query
    Search(cmd::search::SearchArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = Arc::new(citeline_core::ProgressContext::new());

    // Logging:
    //   TTY:     quiet (warn) unless --debug  — progress bar shows activity
    //   non-TTY: info unless --debug          — logs are the only progress indicator
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = is_tty && !cli.debug;
    citeline_core::init_logging(
        citeline_core::Verbosity::from_flags(quiet, cli.debug),
        multi,
    );

    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command.unwrap_or(Command::Run(cmd::run::RunArgs::default())) {
        Command::Run(args) => cmd::run::run(args, &config, &progress),
        Command::Search(args) => cmd::search::run(args, &config),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec!["DataCite URL", &config.datacite.base_url]);
            table.add_row(vec![
                "Page size",
                &config.datacite.page_size.to_string(),
            ]);
            table.add_row(vec!["Max pages", &config.datacite.max_pages.to_string()]);
            table.add_row(vec!["OpenCitations URL", &config.opencitations.base_url]);
            table.add_row(vec!["Scopus URL", &config.scopus.base_url]);
            table.add_row(vec![
                "Scopus API key",
                if config.scopus.api_key.is_some() {
                    "configured"
                } else {
                    "not set"
                },
            ]);
            table.add_row(vec![
                "Citation window",
                &format!(
                    "{}..={}",
                    config.report.min_citations, config.report.max_citations
                ),
            ]);
            table.add_row(vec![
                "Output directory",
                &config.report.output_dir.display().to_string(),
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
