//! Page record extraction
//!
//! This module walks a parsed document and fills a `PageRecord`:
//! - Title and meta description
//! - Up to five headings per level (h1, h2, h3)
//! - The first ten anchors with text and a resolvable target
//! - The first five images with a resolvable source
//! - Up to ten distinct meta tags keyed by `name` or `property`
//!
//! Each category is a single pass in document order that stops as soon as its
//! cap is reached. Missing elements leave the field at its empty default.

use crate::analyzer::parser::{DocumentTree, Element};
use crate::record::{
    truncate_chars, HeadingLevel, Image, Link, PageRecord, ALT_MAX_CHARS, LINK_TEXT_MAX_CHARS,
    META_CONTENT_MAX_CHARS,
};
use crate::url::resolve_reference;
use url::Url;

/// Extracts a bounded structural summary from a document
///
/// # Arguments
///
/// * `tree` - The parsed document
/// * `base_url` - The URL the document was requested from
///
/// # Example
///
/// ```
/// use page_survey::analyzer::{extract, parse};
/// use url::Url;
///
/// let tree = parse(r#"<html><head><title>Test</title></head><body><a href="/about">About</a></body></html>"#);
/// let base_url = Url::parse("https://example.com/page").unwrap();
/// let record = extract(&tree, &base_url);
///
/// assert_eq!(record.title, "Test");
/// assert_eq!(record.links.as_slice()[0].url, "https://example.com/about");
/// ```
pub fn extract(tree: &DocumentTree, base_url: &Url) -> PageRecord {
    let base = document_base(tree, base_url);
    let mut record = PageRecord::empty();

    record.title = extract_title(tree);
    record.description = extract_description(tree);
    extract_headings(tree, &mut record);
    extract_links(tree, &base, &mut record);
    extract_images(tree, &base, &mut record);
    extract_meta_info(tree, &mut record);

    tracing::debug!(
        "Extracted from {}: {} links, {} images, {} meta entries",
        base_url,
        record.links.len(),
        record.images.len(),
        record.meta_info.len()
    );

    record
}

/// Returns the URL relative references are resolved against
///
/// A `<base href>` element overrides the request URL; its own href may itself
/// be relative to the request URL.
fn document_base(tree: &DocumentTree, request_url: &Url) -> Url {
    tree.find_all("base")
        .find_map(|base| base.attr("href"))
        .and_then(|href| request_url.join(href.trim()).ok())
        .unwrap_or_else(|| request_url.clone())
}

fn extract_title(tree: &DocumentTree) -> String {
    tree.find_first("title")
        .map(|title| title.text().trim().to_string())
        .unwrap_or_default()
}

fn extract_description(tree: &DocumentTree) -> String {
    tree.find_all("meta")
        .find(|meta| meta.attr("name") == Some("description"))
        .and_then(|meta| meta.attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

fn extract_headings(tree: &DocumentTree, record: &mut PageRecord) {
    for level in HeadingLevel::all() {
        let headings = record.headings.level_mut(level);
        for heading in tree.find_all(level.tag()) {
            if !headings.push(heading.text().trim().to_string()) {
                break;
            }
        }
    }
}

/// Collects anchors in document order
///
/// Anchors without a non-blank href, with blank text, or whose href cannot be
/// resolved are skipped and do not count toward the cap.
fn extract_links(tree: &DocumentTree, base: &Url, record: &mut PageRecord) {
    for anchor in tree.find_all("a") {
        if record.links.is_full() {
            break;
        }

        let Some(href) = anchor.attr("href").filter(|href| !href.trim().is_empty()) else {
            continue;
        };

        let text = anchor.text();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(url) = resolve_reference(base, href) {
            record.links.push(Link {
                text: truncate_chars(text, LINK_TEXT_MAX_CHARS),
                url,
            });
        }
    }
}

fn extract_images(tree: &DocumentTree, base: &Url, record: &mut PageRecord) {
    for image in tree.find_all("img") {
        if record.images.is_full() {
            break;
        }

        let Some(src) = image.attr("src").and_then(|src| resolve_reference(base, src)) else {
            continue;
        };

        record.images.push(Image {
            alt: truncate_chars(image.attr("alt").unwrap_or(""), ALT_MAX_CHARS),
            src,
        });
    }
}

/// Collects meta tags keyed by `name`, falling back to `property`
///
/// The first occurrence of a key wins. Empty attributes count as absent.
fn extract_meta_info(tree: &DocumentTree, record: &mut PageRecord) {
    for meta in tree.find_all("meta") {
        if record.meta_info.is_full() {
            break;
        }

        let (Some(key), Some(content)) = (meta_key(&meta), non_empty(meta.attr("content"))) else {
            continue;
        };

        record
            .meta_info
            .insert(key, truncate_chars(content, META_CONTENT_MAX_CHARS));
    }
}

fn meta_key<'a>(meta: &Element<'a>) -> Option<&'a str> {
    non_empty(meta.attr("name")).or_else(|| non_empty(meta.attr("property")))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
