// src/github/fetch.rs
// =============================================================================
// Lists every repository of a GitHub organisation through the REST API.
//
// Strategy:
// - GET {api_url}/orgs/{org}/repos?per_page=N&page=P, starting at page 1
// - Keep going until a page comes back with fewer than N entries
// - Authenticate with a bearer token when one is configured (private repos
//   and the higher rate limit need it)
//
// There is no retry here: the first failing request ends the listing and
// the error travels up to main.
//
// Rust concepts:
// - Traits: GithubSource implements RepoSource so the exporter can't tell it
//   apart from a file or a test fixture
// - async/await: each page is one awaited HTTP request
// - Loops with early exit: `loop` + `break` for pagination
// =============================================================================

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::{RepoSource, RepositoryRecord, SourceError};
use crate::config::SourceConfig;

const GITHUB_JSON: &str = "application/vnd.github+json";

// A repository source backed by the live GitHub API
pub struct GithubSource {
    client: Client,
    base: Url,
    org: String,
    token: Option<String>,
    per_page: u32,
}

impl GithubSource {
    // Creates a source for `org` using the API location and credentials in
    // `config`
    pub fn new(org: &str, config: &SourceConfig) -> Result<Self, SourceError> {
        let base = Url::parse(&config.api_url)?;

        // URLs like "mailto:..." have no path we could add segments to
        if base.cannot_be_a_base() {
            return Err(SourceError::NotABase(config.api_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GithubSource {
            client,
            base,
            org: org.to_string(),
            token: config.token.clone(),
            per_page: config.per_page.clamp(1, 100),
        })
    }

    // Builds the listing URL for one page (pages are 1-based on GitHub)
    //
    // The org goes in as a single path segment, so characters like '/', '?'
    // or '#' in it are percent-encoded instead of reshaping the URL.
    pub fn page_url(&self, page: u32) -> Result<Url, SourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::NotABase(self.base.to_string()))?
            .pop_if_empty()
            .extend(["orgs", self.org.as_str(), "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<RepositoryRecord>, SourceError> {
        let url = self.page_url(page)?;
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(url.clone())
            .header(USER_AGENT, concat!("repo-export/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        parse_page(&body)
    }
}

#[async_trait]
impl RepoSource for GithubSource {
    async fn list_repos(&self) -> Result<Vec<RepositoryRecord>, SourceError> {
        let mut repos = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_page(page).await?;
            let len = batch.len();
            debug!("page {} returned {} repositories", page, len);
            repos.extend(batch);

            // A short page is the last one
            if len < self.per_page as usize {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }
}

// Decodes one page of the listing (a JSON array of repository objects)
pub fn parse_page(body: &str) -> Result<Vec<RepositoryRecord>, SourceError> {
    Ok(serde_json::from_str(body)?)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does page_url use path_segments_mut()?
//    - format!("orgs/{}/repos", org) pastes the text in as-is
//    - An org called "a/b" would then become two path segments
//    - path_segments_mut().extend(...) percent-encodes each segment for us
//
// 2. What does #[async_trait] do?
//    - Plain traits couldn't always have async methods
//    - The macro rewrites them into methods returning boxed futures
//    - That's what lets us store a GithubSource as Box<dyn RepoSource>
//
// 3. Why `if let Some(token) = &self.token`?
//    - The token is optional, public repositories don't need one
//    - Borrowing with & means we don't move the String out of self
// -----------------------------------------------------------------------------
