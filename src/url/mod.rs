//! URL handling module for Page-Survey
//!
//! This module provides host extraction for artifact naming and resolution of
//! relative references found in a document against its base URL.

mod domain;
mod resolve;

// Re-export main functions
pub use domain::{extract_netloc, sanitize_host};
pub use resolve::{parse_target, resolve_reference};
