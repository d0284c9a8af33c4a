use serde::Deserialize;

/// Main configuration structure for quotegrab
///
/// The only required field is `data_source`; everything under `scrape`
/// defaults to the public quotes site. Unrecognized fields in the JSON
/// object are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the SQLite database the scraped quotes are written to
    pub data_source: String,

    /// Scraper settings
    #[serde(default)]
    pub scrape: ScrapeConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    /// URL of the first page to fetch
    #[serde(default = "default_start_url")]
    pub start_url: String,

    /// Origin used to resolve relative pager links
    #[serde(default = "default_site_origin")]
    pub site_origin: String,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            site_origin: default_site_origin(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_start_url() -> String {
    "https://quotes.toscrape.com/".to_string()
}

fn default_site_origin() -> String {
    "https://quotes.toscrape.com".to_string()
}

fn default_user_agent() -> String {
    format!("quotegrab/{}", env!("CARGO_PKG_VERSION"))
}
