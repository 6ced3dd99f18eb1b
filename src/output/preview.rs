//! Operator-facing preview of a page record
//!
//! Shows the title, the start of the description, and the first three entries
//! of every bounded collection.

use crate::record::{truncate_chars, PageRecord};
use std::fmt::Write;

/// Entries shown per collection
pub const PREVIEW_ENTRIES: usize = 3;

const DESCRIPTION_PREVIEW_CHARS: usize = 100;
const HEADING_PREVIEW_CHARS: usize = 60;

/// Formats a page record for the terminal
pub fn format_preview(record: &PageRecord) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Title: {}", record.title);
    if record.description.is_empty() {
        let _ = writeln!(out, "Description: No description found");
    } else {
        let _ = writeln!(
            out,
            "Description: {}...",
            truncate_chars(&record.description, DESCRIPTION_PREVIEW_CHARS)
        );
    }

    let _ = writeln!(out, "\nPage Structure:");
    for (level, headings) in record.headings.iter() {
        if headings.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "  {}: {} found",
            level.tag().to_uppercase(),
            headings.len()
        );
        for (i, heading) in headings.iter().take(PREVIEW_ENTRIES).enumerate() {
            let _ = writeln!(
                out,
                "    {}. {}...",
                i + 1,
                truncate_chars(heading, HEADING_PREVIEW_CHARS)
            );
        }
    }

    if !record.links.is_empty() {
        let _ = writeln!(
            out,
            "\nLinks: {} found (showing first {})",
            record.links.len(),
            PREVIEW_ENTRIES
        );
        for (i, link) in record.links.iter().take(PREVIEW_ENTRIES).enumerate() {
            let _ = writeln!(out, "  {}. {} -> {}", i + 1, link.text, link.url);
        }
    }

    if !record.images.is_empty() {
        let _ = writeln!(
            out,
            "\nImages: {} found (showing first {})",
            record.images.len(),
            PREVIEW_ENTRIES
        );
        for (i, image) in record.images.iter().take(PREVIEW_ENTRIES).enumerate() {
            let _ = writeln!(out, "  {}. {} -> {}", i + 1, image.alt, image.src);
        }
    }

    out
}
