use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data_source.is_empty() {
        return Err(ConfigError::Validation(
            "data_source cannot be empty".to_string(),
        ));
    }

    if config.scrape.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    validate_page_url(&config.scrape.start_url, "start_url")?;

    let origin = validate_page_url(&config.scrape.site_origin, "site_origin")?;
    if origin.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "site_origin '{}' has no host",
            config.scrape.site_origin
        )));
    }

    Ok(())
}

/// Parses a configured URL and checks it is fetchable over HTTP(S)
fn validate_page_url(value: &str, field: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} must use the http or https scheme, got '{}'",
            field, value
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ScrapeConfig;

    fn valid_config() -> Config {
        Config {
            data_source: "./quotes.db".to_string(),
            scrape: ScrapeConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_data_source_fails() {
        let mut config = valid_config();
        config.data_source = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_user_agent_fails() {
        let mut config = valid_config();
        config.scrape.user_agent = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_unparseable_start_url_fails() {
        let mut config = valid_config();
        config.scrape.start_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_origin_fails() {
        let mut config = valid_config();
        config.scrape.site_origin = "ftp://quotes.toscrape.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_http_origin_allowed() {
        // Plain http stays valid so local and test targets work
        let mut config = valid_config();
        config.scrape.start_url = "http://127.0.0.1:8080/".to_string();
        config.scrape.site_origin = "http://127.0.0.1:8080".to_string();
        assert!(validate(&config).is_ok());
    }
}
