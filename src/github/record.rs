// src/github/record.rs
// =============================================================================
// The repository record as the GitHub REST API describes it.
//
// Only the five attributes the default export needs are required. Everything
// else is optional so that trimmed-down JSON listings (hand-written fixtures,
// older dumps) still deserialize. Unknown keys are ignored by serde.
// =============================================================================

use serde::Deserialize;

// One entry of `GET /orgs/{org}/repos`
//
// Records are read-only once fetched: the exporter only sorts and formats
// them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    /// Short repository name (e.g. "central-ledger")
    pub name: String,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
    /// Free-text description, null on GitHub when never set
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the repository has been archived
    #[serde(default)]
    pub archived: bool,
    /// Number of forks, used as the sort key
    #[serde(default)]
    pub forks_count: u64,

    /// "owner/name"
    #[serde(default)]
    pub full_name: Option<String>,
    /// Browser URL of the repository
    #[serde(default)]
    pub html_url: Option<String>,
    /// Primary language as detected by GitHub
    #[serde(default)]
    pub language: Option<String>,
    /// Whether this repository is itself a fork
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub default_branch: Option<String>,
    // Timestamps are kept as the ISO-8601 strings GitHub sends, they are
    // only ever copied into the CSV.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub pushed_at: Option<String>,
}

impl RepositoryRecord {
    /// Builds a record with just a name and a fork count
    ///
    /// Handy for fixtures; every other attribute takes its default.
    #[cfg(test)]
    pub fn with_forks(name: &str, forks_count: u64) -> Self {
        RepositoryRecord {
            name: name.to_string(),
            private: false,
            description: None,
            archived: false,
            forks_count,
            full_name: None,
            html_url: None,
            language: None,
            fork: false,
            stargazers_count: 0,
            watchers_count: 0,
            open_issues_count: 0,
            default_branch: None,
            created_at: None,
            updated_at: None,
            pushed_at: None,
        }
    }
}
