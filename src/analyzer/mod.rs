//! Analyzer module: the fetch → parse → extract → persist pipeline
//!
//! This module contains the per-page pipeline, including:
//! - HTTP fetching with a per-request timeout
//! - Tolerant HTML parsing into a queryable document tree
//! - Bounded extraction of the page record
//! - Sequential batch coordination with pacing and failure isolation

mod coordinator;
mod extractor;
mod fetcher;
mod parser;

pub use coordinator::{run_batch, Coordinator};
pub use extractor::extract;
pub use fetcher::{build_http_client, Fetcher};
pub use parser::{parse, DocumentTree, Element};
