//! State module for tracking batch progress
//!
//! # Components
//!
//! - `UrlState`: The per-URL state machine (pending, fetching, ..., persisted)
//! - `UrlTracker`: Holds one URL's current state and validates each transition

mod tracker;
mod url_state;

// Re-export main types
pub use tracker::UrlTracker;
pub use url_state::UrlState;
