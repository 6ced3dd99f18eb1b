//! HTTP fetcher implementation
//!
//! One GET per URL, carrying a fixed browser-like user agent. There are no
//! retries and redirects follow the client's default policy. Failures are
//! classified into network errors, timeouts, and non-success statuses.

use crate::config::FetcherConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client that identifies itself with `user_agent`
///
/// Idle connections are never pooled, so every request opens its own
/// connection and nothing outlives the URL that used it.
///
/// # Example
///
/// ```no_run
/// use page_survey::analyzer::build_http_client;
///
/// let client = build_http_client("Mozilla/5.0 (compatible; page-survey)").unwrap();
/// ```
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .pool_max_idle_per_host(0)
        .build()
}

/// Issues page requests with a default per-request timeout
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Creates a fetcher from configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self::with_client(client, config.timeout()))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches `url` using the default timeout
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.fetch_with_timeout(url, self.timeout).await
    }

    /// Fetches `url`, giving up after `timeout`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The response body of a 2xx response
    /// * `Err(FetchError::Timeout)` - The request or body read exceeded `timeout`
    /// * `Err(FetchError::HttpStatus)` - The server answered with a non-success status
    /// * `Err(FetchError::Network)` - Connection, DNS, TLS, or body decoding failure
    pub async fn fetch_with_timeout(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> Result<String, FetchError> {
        tracing::debug!("GET {} (timeout {:?})", url, timeout);

        let response = self
            .client
            .get(url.as_str())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| classify_error(url, e))
    }
}

/// Maps a transport error onto the fetch failure taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Network {
            url: url.to_string(),
            message: format!("Connection failed: {}", error),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
