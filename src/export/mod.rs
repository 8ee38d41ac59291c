// src/export/mod.rs
// =============================================================================
// The export pipeline: fetch -> sort -> render -> write.
//
// Submodules:
// - columns: which columns exist and how each one is formatted
// - writer: fork-count ordering and CSV rendering
//
// The repository source is passed in, so the whole pipeline can run against
// an in-memory fixture in tests.
// =============================================================================

mod columns;
mod writer;

use log::info;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, ExportConfig};
use crate::github::{RepoSource, SourceError};

pub use columns::{resolve_columns, Column};
pub use writer::{render_csv, sort_by_forks};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not fetch repositories: {0}")]
    Source(#[from] SourceError),

    #[error("could not render CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

// What a finished export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of data rows (the header is not counted)
    pub rows: usize,
    pub path: PathBuf,
}

// Runs one export
//
// The field list is validated before the source is asked for anything, so a
// typo in the config never costs an API round trip. The output file is
// overwritten in a single write; its directory must already exist.
pub async fn export(
    config: &ExportConfig,
    source: &dyn RepoSource,
) -> Result<ExportSummary, ExportError> {
    let columns = resolve_columns(config.fields.as_slice())?;

    let mut repos = source.list_repos().await?;
    println!("📦 Found: {} repos.", repos.len());

    sort_by_forks(&mut repos);
    let csv = render_csv(&repos, &columns, config.quote_style)?;

    std::fs::write(&config.output, &csv).map_err(|source| ExportError::Write {
        path: config.output.clone(),
        source,
    })?;
    info!(
        "wrote {} bytes ({} rows) to {}",
        csv.len(),
        repos.len(),
        config.output.display()
    );

    Ok(ExportSummary {
        rows: repos.len(),
        path: config.output.clone(),
    })
}
