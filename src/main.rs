//! Quotegrab main entry point
//!
//! This is the command-line interface for the quotegrab scraper.

use clap::Parser;
use quotegrab::config::{load_config_with_hash, Config};
use quotegrab::scrape::run_scrape;
use quotegrab::storage::{open_storage, persist_quotes, Storage};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Quotegrab: a paginated quotes scraper
///
/// Quotegrab walks a quotes website page by page, following the pager's
/// next link until it runs out, and stores every extracted quote as a
/// row in a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "quotegrab")]
#[command(version = "1.0.0")]
#[command(about = "Scrape a paginated quotes site into SQLite", long_about = None)]
struct Cli {
    /// Path to JSON configuration file
    #[arg(value_name = "CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics from the database and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_scrape(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotegrab=info,warn"),
            1 => EnvFilter::new("quotegrab=debug,info"),
            2 => EnvFilter::new("quotegrab=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Quotegrab Dry Run ===\n");

    println!("Scrape:");
    println!("  Start URL: {}", config.scrape.start_url);
    println!("  Site origin: {}", config.scrape.site_origin);
    println!("  User agent: {}", config.scrape.user_agent);

    println!("\nDatabase:");
    println!("  Path: {}", config.data_source);

    println!("\n✓ Configuration is valid");
    println!("✓ Would scrape starting from {}", config.scrape.start_url);
}

/// Handles the --stats mode: shows statistics from the database
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}\n", config.data_source);

    let storage = open_storage(Path::new(&config.data_source))?;

    println!("Quotes:  {}", storage.count_quotes()?);
    println!("Authors: {}", storage.count_authors()?);

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    // The database must be reachable before any network activity.
    let mut storage = match open_storage(Path::new(&config.data_source)) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!("Failed to open database '{}': {}", config.data_source, e);
            return Err(e.into());
        }
    };

    tracing::info!("Scraping from: {}", config.scrape.start_url);
    let quotes = match run_scrape(&config).await {
        Ok(quotes) => quotes,
        Err(e) => {
            // Fail-fast scrape: one bad page means nothing is persisted.
            tracing::error!("Scrape failed: {}", e);
            return Ok(());
        }
    };

    tracing::info!("Scraped {} quotes, inserting", quotes.len());
    let report = persist_quotes(&mut storage, &quotes);

    if report.failed > 0 {
        tracing::warn!(
            "{} of {} inserts failed",
            report.failed,
            report.inserted + report.failed
        );
    }
    tracing::info!(
        "Inserted {} quotes into {}",
        report.inserted,
        config.data_source
    );

    Ok(())
}
