//! Page record data model
//!
//! A `PageRecord` is the bounded structural summary of one fetched document.
//! Every collection in it is capped at construction time, and every bounded
//! string is truncated rather than rejected.

mod bounded;
mod types;

pub use bounded::{truncate_chars, BoundedList, BoundedMap};
pub use types::{
    AnalysisResult, HeadingLevel, Headings, Image, Link, PageRecord, ALT_MAX_CHARS,
    HEADINGS_PER_LEVEL, LINK_TEXT_MAX_CHARS, MAX_IMAGES, MAX_LINKS, MAX_META_ENTRIES,
    META_CONTENT_MAX_CHARS, TIMESTAMP_FORMAT,
};
