// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: the repository listing is fetched over the network
// - Trait objects: Box<dyn RepoSource> picks the source at runtime
// - Result<T, E> and ?: errors bubble up to main and become exit code 2
// =============================================================================

mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - defaults and the JSON config file
mod export;        // src/export/ - sorting, CSV rendering, writing
mod github;        // src/github/ - where repository records come from

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ExportArgs};
use config::ConfigError;
use export::Column;
use github::{GithubSource, JsonFileSource, RepoSource};
use log::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins over --log-level when both are present
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Export(args) => handle_export(&args).await,
        Commands::Fields => {
            handle_fields();
            Ok(())
        }
    }
}

// Handles the 'export' subcommand
async fn handle_export(args: &ExportArgs) -> Result<()> {
    let config = args.resolve()?;
    info!(
        "exporting fields [{}] to {}",
        config.export.fields.join(","),
        config.export.output.display()
    );

    // A saved listing takes priority over any organisation in the config file
    let source: Box<dyn RepoSource> = match &args.input {
        Some(path) => {
            println!("🔍 Reading repositories from {}", path.display());
            Box::new(JsonFileSource::new(path))
        }
        None => {
            let org = config.source.org.as_deref().ok_or(ConfigError::MissingOrg)?;
            println!("🔍 Listing repositories of GitHub organisation: {}", org);
            Box::new(
                GithubSource::new(org, &config.source)
                    .context("could not set up the GitHub client")?,
            )
        }
    };

    let summary = export::export(&config.export, source.as_ref()).await?;
    println!(
        "✅ Wrote {} row(s) to {}",
        summary.rows,
        summary.path.display()
    );

    Ok(())
}

// Handles the 'fields' subcommand
fn handle_fields() {
    for column in Column::all() {
        println!("{}", column.name());
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Box<dyn RepoSource>?
//    - The two sources are different types (GithubSource, JsonFileSource)
//    - A match arm must return one type, so we box both behind the trait
//    - `source.as_ref()` then lends it to export() as &dyn RepoSource
//
// 2. What does `{:#}` do for an anyhow::Error?
//    - `{}` prints only the outermost message
//    - `{:#}` prints the whole chain: "could not set up ...: invalid API URL"
//
// 3. Why is logging set up before anything else?
//    - log::info!/debug! calls made before init() are silently dropped
//    - RUST_LOG=debug repo-export export ... shows every request URL
// -----------------------------------------------------------------------------
