//! Tolerant HTML document tree
//!
//! Parsing never fails: malformed markup yields whatever partial structure the
//! HTML5 tree builder recovers, and absent elements are simply not found.

use scraper::{ElementRef, Html};

/// A parsed document, queryable by tag name
pub struct DocumentTree {
    html: Html,
}

/// One element of a `DocumentTree`
#[derive(Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

/// Parses raw markup into a document tree
///
/// # Example
///
/// ```
/// use page_survey::analyzer::parse;
///
/// let tree = parse("<html><head><title>Test</title></head></html>");
/// assert_eq!(tree.find_first("title").map(|t| t.text()), Some("Test".to_string()));
/// ```
pub fn parse(raw: &str) -> DocumentTree {
    DocumentTree {
        html: Html::parse_document(raw),
    }
}

impl DocumentTree {
    /// Returns every element with the given tag name, in document order
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Element<'a>> + 'a {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.value().name().eq_ignore_ascii_case(tag))
            .map(|inner| Element { inner })
    }

    /// Returns the first element with the given tag name
    pub fn find_first<'a>(&'a self, tag: &'a str) -> Option<Element<'a>> {
        self.find_all(tag).next()
    }
}

impl<'a> Element<'a> {
    /// Returns the element's tag name
    pub fn tag(&self) -> &'a str {
        self.inner.value().name()
    }

    /// Looks up an attribute by name
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }

    /// Returns the concatenated text of the element and its descendants
    pub fn text(&self) -> String {
        self.inner.text().collect()
    }
}
