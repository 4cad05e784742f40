//! Markup-stripping text normalizer.
//!
//! Used on matched fragments (highlight headings in particular) to remove
//! embedded tags left behind by the pattern matching. This is not HTML
//! sanitization: entities are passed through untouched and no attempt is
//! made to balance or validate tags.

use std::sync::LazyLock;

use regex::Regex;

/// Any opening-angle-bracket-to-closing-angle-bracket span, non-greedy.
#[allow(clippy::expect_used)]
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag regex"));

/// Removes every `<...>` span from the input, leaving surrounding text and
/// entities as they were.
#[must_use]
pub fn strip_tags(input: &str) -> String {
    MARKUP_TAG.replace_all(input, "").into_owned()
}

/// Strips markup and trims surrounding whitespace.
#[must_use]
pub fn clean_fragment(input: &str) -> String {
    strip_tags(input).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip_tags("<div>Simple text</div>"), "Simple text");
        assert_eq!(strip_tags(r#"<span style="color:red">Red text</span>"#), "Red text");
    }

    #[test]
    fn strips_color_span_from_heading() {
        let heading = r#"<span class="highlight_yellow">Chapter 1</span>, Location 123"#;
        assert_eq!(strip_tags(heading), "Chapter 1, Location 123");
    }

    #[test]
    fn leaves_entities_untouched() {
        assert_eq!(strip_tags("Fish &amp; Chips"), "Fish &amp; Chips");
    }

    #[test]
    fn leaves_tagless_text_unchanged() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
    }

    #[test]
    fn clean_fragment_strips_and_trims() {
        assert_eq!(clean_fragment("  <b>bold</b> text \n"), "bold text");
    }
}
