// src/config.rs
// =============================================================================
// Export configuration.
//
// Settings come from three layers, later ones winning:
// 1. Built-in defaults (the classic five-column layout written to repos.csv)
// 2. An optional JSON config file (--config)
// 3. Command-line flags (merged in cli.rs)
//
// Example config file:
//
//   {
//     "fields": ["name", "forks_count", "stargazers_count"],
//     "output": "reports/mojaloop.csv",
//     "source": { "org": "mojaloop" }
//   }
// =============================================================================

use clap::ValueEnum;
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_FIELDS: [&str; 5] = ["name", "private", "description", "archived", "forks_count"];
pub const DEFAULT_OUTPUT: &str = "repos.csv";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u32 = 100;

// Keys the config file understands; anything else is probably a typo
const TOP_LEVEL_KEYS: [&str; 4] = ["fields", "output", "quote_style", "source"];
const SOURCE_KEYS: [&str; 4] = ["org", "api_url", "token", "per_page"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no fields configured, at least one column is required")]
    NoFields,

    #[error("unknown field '{0}' (run `repo-export fields` to list the available ones)")]
    UnknownField(String),

    #[error("no GitHub organisation configured (use --org, source.org, or --input)")]
    MissingOrg,
}

// When the CSV writer wraps a cell in double quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Only cells containing a delimiter, quote or newline
    #[default]
    Necessary,
    /// Every cell, header included
    Always,
}

// What to write and where
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Ordered column names, both the header and every row follow this list
    pub fields: Vec<String>,
    /// Destination CSV path, overwritten if it exists
    pub output: PathBuf,
    pub quote_style: QuoteStyle,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            quote_style: QuoteStyle::default(),
        }
    }
}

// Where the GitHub listing comes from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub org: Option<String>,
    pub api_url: String,
    // Usually supplied through GITHUB_TOKEN rather than written to disk
    pub token: Option<String>,
    pub per_page: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            org: None,
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

// The whole config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub export: ExportConfig,
    pub source: SourceConfig,
}

impl Config {
    // Reads and parses a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        };
        let value: Value = serde_json::from_str(&text).map_err(parse_error)?;

        // serde can't reject these itself: `flatten` and
        // `deny_unknown_fields` don't mix
        for key in unknown_keys(&value) {
            warn!("ignoring unknown key '{}' in {}", key, path.display());
        }

        serde_json::from_value(value).map_err(parse_error)
    }
}

// Lists keys of a config document that no setting reads, as dotted paths
pub fn unknown_keys(value: &Value) -> Vec<String> {
    let mut unknown = Vec::new();
    let Some(object) = value.as_object() else {
        return unknown;
    };

    for (key, nested) in object {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
        } else if key == "source" {
            if let Some(source) = nested.as_object() {
                unknown.extend(
                    source
                        .keys()
                        .filter(|k| !SOURCE_KEYS.contains(&k.as_str()))
                        .map(|k| format!("source.{}", k)),
                );
            }
        }
    }

    unknown
}
