//! Compiled regex patterns and literal markers for highlight extraction.
//!
//! All patterns are compiled once at startup using `LazyLock`. The title,
//! author, and color cascades are stored as ordered arrays so that
//! first-match-wins stays declarative data rather than control flow.
//!
//! The notebook export is a quasi-fixed format: class names like
//! `bookTitle`, `sectionHeading`, `noteHeading`, and `noteText` are emitted
//! by the Kindle app itself, which is why literal patterns are reliable
//! here where they would not be on arbitrary web markup.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Literal split markers
// =============================================================================

/// Opening marker of a section heading block.
pub const SECTION_HEADING_OPEN: &str = r#"<div class="sectionHeading">"#;

/// Opening marker of a highlight heading block.
pub const NOTE_HEADING_OPEN: &str = r#"<div class="noteHeading">"#;

/// Closing tag terminating section and heading blocks.
pub const BLOCK_CLOSE: &str = "</div>";

// =============================================================================
// Title / author cascades
// =============================================================================

/// Title patterns, tried in priority order; the first capture wins.
pub static TITLE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?s)<div class="bookTitle">\s*(.*?)\s*</div>"#).expect("bookTitle div regex"),
        Regex::new(r#"(?s)<h2 class="bookTitle">\s*(.*?)\s*</h2>"#).expect("bookTitle h2 regex"),
        Regex::new(r"(?s)<h1>\s*(.*?)\s*</h1>").expect("h1 title regex"),
    ]
});

/// Author patterns, tried in priority order; the first capture wins.
pub static AUTHOR_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?s)<div class="authors">\s*(.*?)\s*</div>"#).expect("authors div regex"),
        Regex::new(r#"(?s)<h3 class="authors">\s*(.*?)\s*</h3>"#).expect("authors h3 regex"),
        Regex::new(r#"(?s)<div class="author">\s*(.*?)\s*</div>"#).expect("author div regex"),
    ]
});

// =============================================================================
// Highlight extraction
// =============================================================================

/// Highlight body block, searched within the remainder after a heading.
pub static NOTE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="noteText">(.*?)</div>"#).expect("noteText regex")
});

/// Strict heading/body pair, matched over one section body.
pub static NOTE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="noteHeading">(.*?)</div>\s*<div class="noteText">(.*?)</div>"#)
        .expect("note pair regex")
});

/// Attribute-tolerant heading/body pair for the document-wide fallback.
/// Some exports carry extra attributes (ids, inline styles) on the note
/// blocks; this variant accepts them where the strict pair does not.
pub static NOTE_PAIR_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<div[^>]*class="noteHeading"[^>]*>(.*?)</div>\s*<div[^>]*class="noteText"[^>]*>(.*?)</div>"#,
    )
    .expect("loose note pair regex")
});

/// Color marker embedded in a highlight heading. Deliberately not `(?s)`:
/// a marker spanning lines is not a real color span.
pub static HIGHLIGHT_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="highlight_(.*?)">.*?</span>"#).expect("highlight color regex")
});

/// Generic div inner text, used by the adjacent-block heuristic.
pub static DIV_INNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<div[^>]*>(.*?)</div>").expect("div inner regex"));
