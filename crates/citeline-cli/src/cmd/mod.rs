//! Subcommands and the query prompt they share

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub mod run;
pub mod search;

const PROMPT: &str = "Enter your search query: ";

/// Use the query given on the command line, or prompt for one on stdin.
pub fn resolve_query(arg: Option<String>) -> Result<String> {
    match arg {
        Some(query) => validate_query(query),
        None => {
            let stdin = std::io::stdin();
            read_query(stdin.lock(), std::io::stdout())
        }
    }
}

/// Print the prompt to `out` and read one line from `input`.
fn read_query(mut input: impl BufRead, mut out: impl Write) -> Result<String> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read query from stdin")?;
    validate_query(line.trim_end_matches(['\r', '\n']).to_string())
}

fn validate_query(query: String) -> Result<String> {
    anyhow::ensure!(!query.trim().is_empty(), "Search query must not be empty");
    Ok(query)
}
