//! # kindle-highlights
//!
//! Extracts highlighted passages from Kindle "notebook export" HTML
//! documents into normalized [`BookRecord`]s ready for republishing in a
//! note-taking service.
//!
//! The export format is semi-structured and inconsistent across Kindle app
//! versions, so extraction runs a cascade of pattern-matching strategies:
//! section-scoped matching first, a document-wide heading/body pair search
//! second, and a permissive adjacent-block heuristic as last resort. An
//! empty highlight list is a valid result, not an error, and [`parse`]
//! never fails: malformed input degrades to placeholder fields instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use kindle_highlights::parse;
//!
//! let html = r#"<div class="bookTitle">Deep Work</div>
//! <div class="authors">Cal Newport</div>
//! <div class="noteHeading">Highlight (<span class="highlight_yellow">yellow</span>) - Page 12</div>
//! <div class="noteText">Clarity about what matters provides clarity about what does not.</div>"#;
//!
//! let record = parse(html);
//! assert_eq!(record.title, "Deep Work");
//! assert_eq!(record.authors.as_deref(), Some("Cal Newport"));
//! assert_eq!(record.highlights.len(), 1);
//! assert_eq!(record.highlights[0].highlight_color, "yellow");
//! ```
//!
//! Diagnostics go through the `log` facade; install a logger such as
//! `env_logger` in the calling binary to see them.

mod error;
mod extract;
mod patterns;
mod record;

/// Charset detection and UTF-8 decoding for export attachments.
pub mod encoding;

/// Publisher payload construction for Notion.
pub mod notion;

/// Markup-stripping text normalizer.
pub mod text;

// Public API - re-exports
pub use record::{BookRecord, Highlight, DEFAULT_COLOR, PARSE_ERROR_TITLE, UNKNOWN_TITLE};

/// Parses one notebook-export HTML document into a [`BookRecord`].
///
/// This call is total: it always returns a record. A document matching no
/// title pattern gets the [`UNKNOWN_TITLE`] placeholder; a catastrophic
/// internal failure yields a [`PARSE_ERROR_TITLE`] record with no
/// highlights. Given identical input the returned record is identical,
/// so reprocessing the same attachment is idempotent.
#[must_use]
pub fn parse(html: &str) -> BookRecord {
    extract::parse_notebook(html)
}

/// Parses a notebook export from raw bytes, honoring the charset declared
/// in the document head (UTF-8 when undeclared).
///
/// # Example
///
/// ```rust
/// use kindle_highlights::parse_bytes;
///
/// let html = b"<html><head><meta charset=\"UTF-8\"></head>\
///     <body><div class=\"bookTitle\">Deep Work</div></body></html>";
/// let record = parse_bytes(html);
/// assert_eq!(record.title, "Deep Work");
/// assert!(record.highlights.is_empty());
/// ```
#[must_use]
pub fn parse_bytes(html: &[u8]) -> BookRecord {
    parse(&encoding::decode_export(html))
}
