//! Configuration loading from TOML files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use citeline_datacite::DataCiteClient;
use citeline_opencitations::OpenCitationsClient;
use citeline_report::{CitationWindow, ReportConfig, Sources};
use citeline_scopus::ScopusClient;

/// Environment variable consulted for the Scopus key when the config
/// file does not set one
pub const SCOPUS_KEY_VAR: &str = "SCOPUS_API_KEY";

/// Global configuration for citeline
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub datacite: DataCiteConfig,
    pub opencitations: OpenCitationsConfig,
    pub scopus: ScopusConfig,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataCiteConfig {
    pub base_url: String,
    pub page_size: usize,
    pub max_pages: usize,
}

impl Default for DataCiteConfig {
    fn default() -> Self {
        let report = ReportConfig::default();
        Self {
            base_url: citeline_datacite::DEFAULT_BASE_URL.to_string(),
            page_size: report.page_size,
            max_pages: report.max_pages,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenCitationsConfig {
    pub base_url: String,
}

impl Default for OpenCitationsConfig {
    fn default() -> Self {
        Self {
            base_url: citeline_opencitations::DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScopusConfig {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_api_key")]
    pub api_key: Option<String>,
}

impl Default for ScopusConfig {
    fn default() -> Self {
        Self {
            base_url: citeline_scopus::DEFAULT_BASE_URL.to_string(),
            api_key: std::env::var(SCOPUS_KEY_VAR).ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub output_dir: PathBuf,
    pub min_citations: u64,
    pub max_citations: u64,
}

impl Default for ReportSection {
    fn default() -> Self {
        let report = ReportConfig::default();
        Self {
            output_dir: report.output_dir,
            min_citations: report.window.min,
            max_citations: report.window.max,
        }
    }
}

/// Scopus key as written in the file: `"${NAME}"` reads the environment
/// variable `NAME`; an empty value or unset variable leaves the key unset.
fn deserialize_api_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(resolve_api_key).filter(|key| !key.is_empty()))
}

fn resolve_api_key(raw: String) -> Option<String> {
    let var = raw
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .map(str::to_owned);
    match var {
        Some(name) => std::env::var(&name).ok(),
        None => Some(raw),
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./citeline.toml (current directory)
    /// 2. <user config dir>/citeline/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("citeline.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "citeline") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pipeline settings derived from the `[datacite]` and `[report]` sections
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            output_dir: self.report.output_dir.clone(),
            page_size: self.datacite.page_size,
            max_pages: self.datacite.max_pages,
            window: CitationWindow {
                min: self.report.min_citations,
                max: self.report.max_citations,
            },
        }
    }

    /// API clients for the configured endpoints
    pub fn sources(&self) -> Sources {
        Sources {
            datacite: DataCiteClient::new(self.datacite.base_url.clone()),
            opencitations: OpenCitationsClient::new(self.opencitations.base_url.clone()),
            scopus: ScopusClient::new(self.scopus.base_url.clone(), self.scopus.api_key.clone()),
        }
    }
}
