use crate::record::bounded::{BoundedList, BoundedMap};
use serde::Serialize;
use std::fmt;

/// Maximum headings kept per level
pub const HEADINGS_PER_LEVEL: usize = 5;
/// Maximum links kept per page
pub const MAX_LINKS: usize = 10;
/// Maximum images kept per page
pub const MAX_IMAGES: usize = 5;
/// Maximum distinct meta keys kept per page
pub const MAX_META_ENTRIES: usize = 10;

pub const LINK_TEXT_MAX_CHARS: usize = 50;
pub const ALT_MAX_CHARS: usize = 30;
pub const META_CONTENT_MAX_CHARS: usize = 100;

/// Format of the `analyzed_at` capture timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Heading levels captured by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    Primary,
    Secondary,
    Tertiary,
}

impl HeadingLevel {
    /// Returns the HTML tag name for this level
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Primary => "h1",
            Self::Secondary => "h2",
            Self::Tertiary => "h3",
        }
    }

    /// All levels in document-outline order
    pub fn all() -> [Self; 3] {
        [Self::Primary, Self::Secondary, Self::Tertiary]
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Heading texts grouped by level; every level is always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headings {
    h1: BoundedList<String>,
    h2: BoundedList<String>,
    h3: BoundedList<String>,
}

impl Headings {
    pub fn new() -> Self {
        Self {
            h1: BoundedList::new(HEADINGS_PER_LEVEL),
            h2: BoundedList::new(HEADINGS_PER_LEVEL),
            h3: BoundedList::new(HEADINGS_PER_LEVEL),
        }
    }

    pub fn level(&self, level: HeadingLevel) -> &BoundedList<String> {
        match level {
            HeadingLevel::Primary => &self.h1,
            HeadingLevel::Secondary => &self.h2,
            HeadingLevel::Tertiary => &self.h3,
        }
    }

    pub fn level_mut(&mut self, level: HeadingLevel) -> &mut BoundedList<String> {
        match level {
            HeadingLevel::Primary => &mut self.h1,
            HeadingLevel::Secondary => &mut self.h2,
            HeadingLevel::Tertiary => &mut self.h3,
        }
    }

    /// Iterates levels in order together with their headings
    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, &BoundedList<String>)> {
        HeadingLevel::all()
            .into_iter()
            .map(move |level| (level, self.level(level)))
    }
}

impl Default for Headings {
    fn default() -> Self {
        Self::new()
    }
}

/// An anchor with non-empty text and an absolute target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// An image with its (possibly empty) alt text and absolute source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub alt: String,
    pub src: String,
}

/// Bounded structural summary of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    pub title: String,
    pub description: String,
    pub headings: Headings,
    pub links: BoundedList<Link>,
    pub images: BoundedList<Image>,
    pub meta_info: BoundedMap,
}

impl PageRecord {
    /// Creates an empty record with every cap in place
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            headings: Headings::new(),
            links: BoundedList::new(MAX_LINKS),
            images: BoundedList::new(MAX_IMAGES),
            meta_info: BoundedMap::new(MAX_META_ENTRIES),
        }
    }
}

impl Default for PageRecord {
    fn default() -> Self {
        Self::empty()
    }
}

/// A page record together with the requested URL and capture time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// The URL as requested, not the post-redirect address
    pub url: String,

    /// Local capture time formatted with `TIMESTAMP_FORMAT`
    pub analyzed_at: String,

    pub data: PageRecord,
}

impl AnalysisResult {
    /// Wraps a record, stamping it with the current local time
    pub fn new(url: impl Into<String>, data: PageRecord) -> Self {
        let analyzed_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(url, analyzed_at, data)
    }

    pub fn with_timestamp(
        url: impl Into<String>,
        analyzed_at: impl Into<String>,
        data: PageRecord,
    ) -> Self {
        Self {
            url: url.into(),
            analyzed_at: analyzed_at.into(),
            data,
        }
    }
}
