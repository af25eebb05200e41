//! Output path derivation and the JSON report writer

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::record::EnrichedRecord;

/// File name for a query: `datasets_<query>.json`.
///
/// Spaces become underscores; path separators are replaced the same way
/// so the file always lands directly in the output directory.
pub fn output_file_name(query: &str) -> String {
    let stem: String = query
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("datasets_{stem}.json")
}

/// Full report path for `query` under `output_dir`
pub fn output_path(output_dir: &Path, query: &str) -> PathBuf {
    output_dir.join(output_file_name(query))
}

/// Serialize records as a JSON array indented with four spaces.
pub fn render_report(records: &[EnrichedRecord]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the report in one shot, creating the parent directory if needed.
///
/// Written to `<path>.tmp` first and renamed, so an interrupted run never
/// leaves a truncated report behind.
pub fn write_report(path: &Path, records: &[EnrichedRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create output dir {}", parent.display()))?;
    }

    let bytes = render_report(records).context("Failed to serialize report")?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, &bytes).with_context(|| format!("Cannot write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Cannot move report to {}", path.display()))?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
