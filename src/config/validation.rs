use crate::config::types::{Config, FetcherConfig, OutputConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_fetcher_config(&config.fetcher)?;
    validate_output_config(&config.output)?;
    validate_default_urls(&config.default_urls)?;
    Ok(())
}

fn validate_fetcher_config(config: &FetcherConfig) -> ConfigResult<()> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.prefix.is_empty() {
        return Err(ConfigError::Validation("prefix cannot be empty".to_string()));
    }

    // The prefix becomes part of a file name
    if !config
        .prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "prefix must contain only alphanumeric characters, '_' and '-', got '{}'",
            config.prefix
        )));
    }

    Ok(())
}

fn validate_default_urls(urls: &[String]) -> ConfigResult<()> {
    if urls.is_empty() {
        return Err(ConfigError::Validation(
            "default-urls must contain at least one URL".to_string(),
        ));
    }

    for raw in urls {
        let url = Url::parse(raw)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid default URL '{}': {}", raw, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "Default URL '{}' must use http or https",
                raw
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = Config::default();
        config.fetcher.timeout_secs = 0;
        assert!(validate(&config).is_err());

        config.fetcher.timeout_secs = 301;
        assert!(validate(&config).is_err());

        config.fetcher.timeout_secs = 300;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_user_agent() {
        let mut config = Config::default();
        config.fetcher.user_agent = "   ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_prefix_characters() {
        let mut config = Config::default();
        config.output.prefix = "site-scan_2".to_string();
        assert!(validate(&config).is_ok());

        config.output.prefix = "../escape".to_string();
        assert!(validate(&config).is_err());

        config.output.prefix = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_default_urls() {
        assert!(validate_default_urls(&[]).is_err());
        assert!(validate_default_urls(&["not a url".to_string()]).is_err());
        assert!(validate_default_urls(&["ftp://example.com/".to_string()]).is_err());
        assert!(validate_default_urls(&["http://example.com/".to_string()]).is_ok());
    }
}
