//! Output module for artifacts and operator-facing reports
//!
//! This module handles:
//! - Writing one JSON artifact per analyzed host
//! - Formatting the terminal preview of each page record
//! - Collecting per-URL outcomes of a batch

mod json;
mod preview;
mod report;
mod traits;

pub use json::{encode_result, JsonFilePersister, ARTIFACT_EXTENSION};
pub use preview::{format_preview, PREVIEW_ENTRIES};
pub use report::{format_banner, BatchReport, UrlOutcome};
pub use traits::Persister;
