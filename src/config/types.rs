use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Client identification sent with every page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetch timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Literal tag every artifact file name starts with
pub const DEFAULT_PREFIX: &str = "website_analysis";

const DEFAULT_DELAY_MS: u64 = 1000;

const DEFAULT_URLS: [&str; 3] = [
    "https://httpbin.org/html",
    "https://example.com",
    "https://httpbin.org/",
];

/// Main configuration structure for Page-Survey
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub output: OutputConfig,
    pub pacing: PacingConfig,

    /// URLs analyzed when the operator supplies none
    #[serde(rename = "default-urls")]
    pub default_urls: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            output: OutputConfig::default(),
            pacing: PacingConfig::default(),
            default_urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
        }
    }
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetcherConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Value of the User-Agent header
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Artifact output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the JSON artifacts are written into
    pub directory: PathBuf,

    /// File name prefix for every artifact
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Delay inserted between consecutive URLs of a batch
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacingConfig {
    /// Milliseconds to wait after one URL finishes before the next starts
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,
}

impl PacingConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}
