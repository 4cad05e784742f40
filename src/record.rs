//! Record types for extraction output.
//!
//! A [`BookRecord`] is the normalized form of one notebook export: the book
//! title, an optional author line, and the highlights in document order. It
//! is built once per input document and handed to the publisher as-is.

use serde::{Deserialize, Serialize};

/// Placeholder title used when no title pattern matches the document.
pub const UNKNOWN_TITLE: &str = "unknown title";

/// Placeholder title of the terminal record produced when extraction itself
/// fails catastrophically.
pub const PARSE_ERROR_TITLE: &str = "parse error";

/// Color value assigned when a highlight carries no color marker.
pub const DEFAULT_COLOR: &str = "default";

/// One highlighted passage from a notebook export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    /// Name of the enclosing section heading. Empty when the document has
    /// no sections or the highlight came from a section-agnostic fallback.
    pub section: String,

    /// The highlight's label line (location/page metadata), markup-stripped.
    pub heading: String,

    /// The highlighted passage body, as matched.
    pub text: String,

    /// Free-form color tag (e.g. "yellow", "pink"), or `"default"` when the
    /// heading carries no color marker.
    pub highlight_color: String,
}

/// Normalized result of parsing one notebook export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Book title. Never empty: [`UNKNOWN_TITLE`] substitutes when no
    /// pattern matches, [`PARSE_ERROR_TITLE`] on catastrophic failure.
    pub title: String,

    /// Author line, verbatim. `None` (not an empty string) when no author
    /// pattern matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,

    /// Highlights in document order. May be empty; an empty list is a
    /// valid result, not an error.
    pub highlights: Vec<Highlight>,
}

impl BookRecord {
    /// Terminal record returned when extraction fails catastrophically.
    #[must_use]
    pub fn parse_error() -> Self {
        Self {
            title: PARSE_ERROR_TITLE.to_string(),
            authors: None,
            highlights: Vec::new(),
        }
    }
}
