//! Pagination driver
//!
//! Walks the next-page chain from a starting URL, fully sequentially,
//! and accumulates every extracted quote. The loop is fail-fast: the
//! first fetch or parse failure discards the accumulator and propagates
//! the error, so callers see either the full record sequence or nothing.
//!
//! The pager chain is followed verbatim. There is no visited-set, so a
//! site whose pagination cycles keeps the loop running; a known
//! limitation of the pager-following contract.

use crate::quote::Quote;
use crate::scrape::extractor::extract_page;
use crate::scrape::fetcher::fetch_page;
use crate::ScrapeError;
use reqwest::Client;
use url::Url;

/// Fetches every page reachable through the pager and returns the full
/// ordered quote sequence
///
/// The cursor starts at `start_url` and is replaced by each page's
/// extracted next link; the loop ends when a page yields none. Records
/// keep page-visit order and, within a page, document order.
///
/// # Arguments
///
/// * `client` - The HTTP client to fetch with
/// * `start_url` - URL of the first page
/// * `site_origin` - Origin used to resolve relative pager links
///
/// # Returns
///
/// * `Ok(Vec<Quote>)` - All quotes across all linked pages
/// * `Err(ScrapeError)` - The first fetch or parse failure; no partial data
pub async fn get_quotes(
    client: &Client,
    start_url: &str,
    site_origin: &Url,
) -> Result<Vec<Quote>, ScrapeError> {
    let mut all_quotes = Vec::new();
    let mut cursor = Some(Url::parse(start_url)?);
    let mut pages_fetched = 0usize;

    while let Some(page_url) = cursor {
        tracing::debug!("Fetching page: {}", page_url);
        let body = fetch_page(client, page_url.as_str()).await?;

        let page = extract_page(&body, site_origin).map_err(|message| ScrapeError::Parse {
            url: page_url.to_string(),
            message,
        })?;

        tracing::debug!(
            "Extracted {} quotes from {} (next: {:?})",
            page.quotes.len(),
            page_url,
            page.next_url.as_ref().map(Url::as_str)
        );

        all_quotes.extend(page.quotes);
        pages_fetched += 1;
        cursor = page.next_url;
    }

    tracing::info!(
        "Scrape complete: {} quotes across {} pages",
        all_quotes.len(),
        pages_fetched
    );

    Ok(all_quotes)
}

// Driver behavior is exercised end-to-end in tests/scrape_tests.rs with
// wiremock servers: page ordering, fetch counts, and fail-fast on a
// mid-pagination failure.
