//! `citeline search` - list DataCite datasets matching a query

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use citeline_datacite::DatasetRecord;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (prompted on stdin when omitted)
    pub query: Option<String>,

    /// Datasets per page
    #[arg(short = 'n', long, default_value_t = 5)]
    pub page_size: usize,

    /// Number of pages to fetch
    #[arg(long, default_value_t = 1)]
    pub pages: usize,
}

pub fn run(args: SearchArgs, config: &Config) -> Result<()> {
    let query = super::resolve_query(args.query)?;
    anyhow::ensure!(args.page_size > 0, "--page-size must be at least 1");

    let datasets = config
        .sources()
        .datacite
        .retrieve(&query, args.page_size, args.pages)
        .with_context(|| format!("Dataset search failed for '{query}'"))?;

    if datasets.is_empty() {
        println!("No datasets found for the given query.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("DOI").fg(Color::Cyan),
            Cell::new("Publisher").fg(Color::Cyan),
            Cell::new("Publication Year").fg(Color::Cyan),
        ]);
    for dataset in &datasets {
        table.add_row(display_row(dataset));
    }

    println!("{table}");
    println!("{} datasets", datasets.len());
    Ok(())
}

/// Table cells for a dataset, with placeholders for missing fields
fn display_row(dataset: &DatasetRecord) -> [String; 4] {
    fn or(value: &str, placeholder: &str) -> String {
        if value.is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        }
    }
    [
        or(&dataset.title, "No title available"),
        or(&dataset.doi, "No DOI available"),
        or(&dataset.publisher, "No publisher available"),
        or(&dataset.publication_year, "No publication year available"),
    ]
}
