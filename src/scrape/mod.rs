//! Scraping module: fetching, extraction, and the pagination loop
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching (one sequential GET per page)
//! - Quote extraction via CSS selectors
//! - The pagination driver that follows next-links until they run out

mod driver;
mod extractor;
mod fetcher;

pub use driver::get_quotes;
pub use extractor::{extract_page, ExtractedPage};
pub use fetcher::{build_http_client, fetch_page};

use crate::config::Config;
use crate::quote::Quote;
use crate::ScrapeError;
use url::Url;

/// Runs a complete scrape as described by the configuration
///
/// This is the main entry point for scraping. It will:
/// 1. Build the HTTP client
/// 2. Walk the pagination chain from the configured start URL
/// 3. Return the full ordered quote sequence, or the first error
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - All quotes in page order
/// * `Err(ScrapeError)` - The scrape failed; no partial data is returned
pub async fn run_scrape(config: &Config) -> Result<Vec<Quote>, ScrapeError> {
    let client = build_http_client(&config.scrape.user_agent)?;
    let site_origin = Url::parse(&config.scrape.site_origin)?;
    get_quotes(&client, &config.scrape.start_url, &site_origin).await
}
