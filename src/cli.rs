// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - export: fetch the repository list and write the CSV
// - fields: print the column names `--fields` accepts
//
// Flags given to `export` override whatever the --config file says, which in
// turn overrides the built-in defaults.
//
// Rust concepts:
// - Derive macros: clap generates the parser from these structs and enums
// - Option<T>: a flag that wasn't given is None and leaves the config alone
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, ConfigError, QuoteStyle};

#[derive(Parser, Debug)]
#[command(
    name = "repo-export",
    version,
    about = "Export a GitHub organisation's repositories to CSV, most forked first",
    long_about = "repo-export lists every repository of a GitHub organisation (or reads a saved \
                  listing), orders them by fork count and writes the columns you choose to a CSV file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch repositories and write them to a CSV file
    ///
    /// Example: repo-export export --org mojaloop --output mojaloop.csv
    Export(ExportArgs),

    /// List the column names that can be exported
    Fields,
}

#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// JSON config file with fields, output, quote_style and source settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GitHub organisation whose repositories are listed
    #[arg(long)]
    pub org: Option<String>,

    /// Read the repository listing from a JSON file instead of the GitHub API
    #[arg(long, value_name = "FILE", conflicts_with = "org")]
    pub input: Option<PathBuf>,

    /// Destination CSV file (overwritten)
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Comma-separated column names, in output order
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub fields: Option<Vec<String>>,

    /// When to wrap cells in double quotes
    #[arg(long, value_enum)]
    pub quote_style: Option<QuoteStyle>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// GitHub token, needed for private repositories
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl ExportArgs {
    // Builds the effective configuration: defaults, then the config file,
    // then any flag that was given
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(org) = &self.org {
            config.source.org = Some(org.clone());
        }
        if let Some(output) = &self.output {
            config.export.output = output.clone();
        }
        if let Some(fields) = &self.fields {
            config.export.fields = fields.clone();
        }
        if let Some(quote_style) = self.quote_style {
            config.export.quote_style = quote_style;
        }
        if let Some(api_url) = &self.api_url {
            config.source.api_url = api_url.clone();
        }
        if let Some(token) = &self.token {
            config.source.token = Some(token.clone());
        }

        Ok(config)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is every ExportArgs field an Option?
//    - We need to know whether the user actually typed the flag
//    - With a default_value we couldn't tell "--output repos.csv" apart from
//      "no --output at all", and the config file would never win
//
// 2. What does value_delimiter = ',' do?
//    - "--fields name,forks_count" becomes vec!["name", "forks_count"]
//
// 3. What does env = "GITHUB_TOKEN" do?
//    - If --token is missing, clap reads the environment variable instead
//    - hide_env_values keeps the token out of --help output
// -----------------------------------------------------------------------------
