//! HTTP fetcher
//!
//! One GET per page; the driver suspends on each request and resumes
//! only after the full body is read. There is no retry and no redirect
//! policy override: transport defaults apply.

use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by every page fetch
///
/// # Arguments
///
/// * `user_agent` - The user agent string sent with every request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page and returns the raw document body
///
/// Non-success HTTP statuses are treated the same as transport failures:
/// either one aborts the whole scrape, so both land on the fetch error
/// path.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError)` - Timeout, connection failure, or HTTP error status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

/// Maps a reqwest error onto the scrape error taxonomy
fn classify_error(url: &str, source: reqwest::Error) -> ScrapeError {
    if source.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Fetch {
            url: url.to_string(),
            source,
        }
    }
}
