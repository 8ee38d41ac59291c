// src/github/file.rs
// =============================================================================
// A repository source that reads a saved listing from disk.
//
// The file holds a JSON array in the same shape the GitHub API returns, so a
// `curl .../orgs/{org}/repos` dump can be exported offline.
// =============================================================================

use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

use super::{fetch::parse_page, RepoSource, RepositoryRecord, SourceError};

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }
}

#[async_trait]
impl RepoSource for JsonFileSource {
    async fn list_repos(&self) -> Result<Vec<RepositoryRecord>, SourceError> {
        debug!("reading repository listing from {}", self.path.display());

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;

        parse_page(&body)
    }
}
