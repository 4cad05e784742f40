//! Core highlight extraction algorithm.
//!
//! The extractor turns one notebook-export document into a
//! [`BookRecord`] using a cascade of pattern-matching strategies:
//!
//! 1. section-scoped extraction (split on section headings, then a
//!    two-step sub-cascade per section),
//! 2. a document-wide heading/body pair regex,
//! 3. a last-resort adjacent-block heuristic over generic divs.
//!
//! Each tier is only attempted when the previous one produced zero
//! highlights, and each runs under panic containment: a tier that blows up
//! is logged and treated as a miss, never propagated. The whole parse is
//! additionally guarded at the top level, so the contract stays total.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, error, info, warn};
use regex::Regex;

use crate::error::TierError;
use crate::patterns::{
    AUTHOR_PATTERNS, BLOCK_CLOSE, DIV_INNER, HIGHLIGHT_COLOR, NOTE_HEADING_OPEN, NOTE_PAIR,
    NOTE_PAIR_LOOSE, NOTE_TEXT, SECTION_HEADING_OPEN, TITLE_PATTERNS,
};
use crate::record::{BookRecord, Highlight, DEFAULT_COLOR, UNKNOWN_TITLE};
use crate::text;

/// Tier-3 acceptance thresholds, in characters.
const MIN_HEADING_CHARS: usize = 5;
const MIN_TEXT_CHARS: usize = 10;

/// Parses one notebook export into a normalized record.
///
/// Total: any failure escaping the extraction tiers is caught here and
/// downgraded to the parse-error placeholder record.
pub(crate) fn parse_notebook(html: &str) -> BookRecord {
    match catch_unwind(AssertUnwindSafe(|| parse_inner(html))) {
        Ok(record) => record,
        Err(payload) => {
            error!("notebook parse failed: {}", panic_message(payload.as_ref()));
            BookRecord::parse_error()
        }
    }
}

fn parse_inner(html: &str) -> BookRecord {
    debug!("parsing notebook export ({} chars)", html.len());

    let title = first_capture(TITLE_PATTERNS.as_slice(), html)
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let authors = first_capture(AUTHOR_PATTERNS.as_slice(), html);

    let highlights = extract_highlights(html);
    info!("extracted {} highlights from \"{title}\"", highlights.len());

    BookRecord {
        title,
        authors,
        highlights,
    }
}

/// Tries each pattern in order and returns the first trimmed capture.
fn first_capture(patterns: &[Regex], html: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Runs the tier cascade, stopping at the first non-empty result.
fn extract_highlights(html: &str) -> Vec<Highlight> {
    let tiers: [(&str, fn(&str) -> Vec<Highlight>); 3] = [
        ("section-scoped", section_scoped_highlights),
        ("document-pair", document_pair_highlights),
        ("adjacent-block", adjacent_block_highlights),
    ];

    for (name, tier) in tiers {
        match run_tier(name, || tier(html)) {
            Ok(highlights) if !highlights.is_empty() => {
                debug!("tier {name} matched {} highlights", highlights.len());
                return highlights;
            }
            Ok(_) => debug!("tier {name} matched nothing, falling through"),
            Err(err) => warn!("tier {name} failed, falling through: {err}"),
        }
    }

    Vec::new()
}

/// Executes one tier with panic containment. A contained panic is the only
/// `TierError`; zero matches is an `Ok` outcome the caller falls through on.
fn run_tier<F>(name: &str, tier: F) -> Result<Vec<Highlight>, TierError>
where
    F: FnOnce() -> Vec<Highlight>,
{
    catch_unwind(AssertUnwindSafe(tier)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        TierError::Panicked(format!("{name}: {message}"))
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

// =============================================================================
// Tier 1: section-scoped extraction
// =============================================================================

/// Splits the document on section headings and extracts each section's
/// highlights. Without any section marker the whole document is treated as
/// one unnamed section.
fn section_scoped_highlights(html: &str) -> Vec<Highlight> {
    let mut highlights = Vec::new();
    let fragments: Vec<&str> = html.split(SECTION_HEADING_OPEN).collect();

    if fragments.len() > 1 {
        // Fragment 0 is front matter before the first section heading.
        for fragment in &fragments[1..] {
            let (name, body) = fragment.split_once(BLOCK_CLOSE).unwrap_or((fragment, ""));
            section_highlights(body, name.trim(), &mut highlights);
        }
    } else {
        section_highlights(html, "", &mut highlights);
    }

    highlights
}

/// Per-section sub-cascade: heading-split extraction first, then the strict
/// pair regex only when the split found nothing in this section.
fn section_highlights(body: &str, section: &str, highlights: &mut Vec<Highlight>) {
    let found = split_on_note_headings(body, section);
    if found.is_empty() {
        highlights.extend(match_note_pairs(&NOTE_PAIR, body, section));
    } else {
        highlights.extend(found);
    }
}

/// Splits a section body on heading markers; each piece contributes a
/// highlight when a body block follows its heading.
fn split_on_note_headings(body: &str, section: &str) -> Vec<Highlight> {
    let mut highlights = Vec::new();

    for piece in body.split(NOTE_HEADING_OPEN).skip(1) {
        // A piece without a closing tag has no usable heading.
        let Some((heading_raw, rest)) = piece.split_once(BLOCK_CLOSE) else {
            continue;
        };
        let Some(text) = NOTE_TEXT
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
        else {
            continue;
        };

        let heading = heading_raw.trim();
        highlights.push(Highlight {
            section: section.to_string(),
            heading: text::clean_fragment(heading),
            text: text.to_string(),
            highlight_color: highlight_color(heading),
        });
    }

    highlights
}

/// Collects heading/body pairs matched directly by `pair` within `body`.
fn match_note_pairs(pair: &Regex, body: &str, section: &str) -> Vec<Highlight> {
    pair.captures_iter(body)
        .filter_map(|caps| {
            let heading = caps.get(1)?.as_str().trim();
            let text = caps.get(2)?.as_str().trim();
            Some(Highlight {
                section: section.to_string(),
                heading: text::clean_fragment(heading),
                text: text.to_string(),
                highlight_color: highlight_color(heading),
            })
        })
        .collect()
}

/// Reads the color name out of a heading's color marker, defaulting when no
/// marker is present.
fn highlight_color(heading: &str) -> String {
    HIGHLIGHT_COLOR
        .captures(heading)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || DEFAULT_COLOR.to_string(),
            |m| m.as_str().trim().to_string(),
        )
}

// =============================================================================
// Tier 2: document-wide pair fallback
// =============================================================================

/// Matches heading/body pairs across the whole document with no section
/// attribution. Color detection is deliberately skipped on this path.
fn document_pair_highlights(html: &str) -> Vec<Highlight> {
    NOTE_PAIR_LOOSE
        .captures_iter(html)
        .filter_map(|caps| {
            let heading = caps.get(1)?.as_str().trim();
            let text = caps.get(2)?.as_str().trim();
            Some(Highlight {
                section: String::new(),
                heading: text::clean_fragment(heading),
                text: text.to_string(),
                highlight_color: DEFAULT_COLOR.to_string(),
            })
        })
        .collect()
}

// =============================================================================
// Tier 3: adjacent-block heuristic
// =============================================================================

/// Interprets adjacent generic blocks as heading/text pairs. Permissive by
/// design: this is last-resort recovery and may accept false positives on
/// documents with no real highlight structure.
fn adjacent_block_highlights(html: &str) -> Vec<Highlight> {
    let blocks: Vec<&str> = DIV_INNER
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect();

    let mut highlights = Vec::new();
    let mut i = 0;
    while i + 1 < blocks.len() {
        let (heading, text) = (blocks[i], blocks[i + 1]);
        let plausible = heading.chars().count() > MIN_HEADING_CHARS
            && text.chars().count() > MIN_TEXT_CHARS
            && !heading.contains('<')
            && !text.contains('<');

        if plausible {
            highlights.push(Highlight {
                section: String::new(),
                heading: heading.to_string(),
                text: text.to_string(),
                highlight_color: DEFAULT_COLOR.to_string(),
            });
            // Consume both blocks of the pair; a rejected candidate only
            // slides the window by one.
            i += 2;
        } else {
            i += 1;
        }
    }

    highlights
}
