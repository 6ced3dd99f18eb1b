//! Configuration module for Page-Survey
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; a missing file section falls back to the built-in
//! defaults, including the demonstration URL set used when no URL is supplied.
//!
//! # Example
//!
//! ```no_run
//! use page_survey::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("page-survey.toml")).unwrap();
//! println!("Fetch timeout: {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, OutputConfig, PacingConfig, DEFAULT_PREFIX, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
