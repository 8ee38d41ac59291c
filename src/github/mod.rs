// src/github/mod.rs
// =============================================================================
// This module is where repository records come from.
//
// The exporter never talks to GitHub directly. It is handed something that
// implements `RepoSource`:
// - GithubSource: pages through the organisation listing on the REST API
// - JsonFileSource: reads a saved listing from disk
//
// Tests use their own in-memory implementation.
// =============================================================================

mod fetch;
mod file;
mod record;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

pub use fetch::GithubSource;
pub use file::JsonFileSource;
pub use record::RepositoryRecord;

// Everything that can go wrong while obtaining the repository list
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("could not decode repository list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API URL cannot take a path: {0}")]
    NotABase(String),
}

/// A provider of repository records
///
/// Implementations return the records in whatever order they obtained them;
/// ordering is the exporter's job.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_repos(&self) -> Result<Vec<RepositoryRecord>, SourceError>;
}
