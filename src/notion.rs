//! Publisher payload construction for Notion.
//!
//! Pure functions that turn a [`BookRecord`] into the JSON payloads the
//! delivery layer posts to the Notion API: page properties for the create
//! call, and content blocks chunked into append-request batches. No HTTP
//! happens here; rate limiting and retries belong to the orchestrator.

use serde_json::{json, Value};

use crate::record::{BookRecord, Highlight};

/// Notion rejects append requests with more than 100 children; stay well
/// under that.
pub const MAX_BLOCKS_PER_REQUEST: usize = 90;

/// Each highlight contributes a heading block and a paragraph block.
const HIGHLIGHTS_PER_BATCH: usize = MAX_BLOCKS_PER_REQUEST / 2;

/// Section label used when grouping highlights that carry no section name.
pub const UNSECTIONED_LABEL: &str = "Uncategorized";

/// Maps an extracted highlight color to Notion's background color names.
/// Unknown colors fall back to `"default"`.
#[must_use]
pub fn map_highlight_color(color: &str) -> &'static str {
    match color {
        "yellow" => "yellow_background",
        "blue" => "blue_background",
        "pink" => "pink_background",
        "orange" => "orange_background",
        _ => "default",
    }
}

/// Builds the property object for the page-create call.
///
/// The authors property is only set when the record has an author line and
/// the target database has a configured property for it.
#[must_use]
pub fn page_properties(
    record: &BookRecord,
    title_property: &str,
    authors_property: Option<&str>,
) -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert(
        title_property.to_string(),
        json!({ "title": [{ "text": { "content": record.title.as_str() } }] }),
    );

    if let (Some(authors), Some(property)) = (record.authors.as_deref(), authors_property) {
        properties.insert(
            property.to_string(),
            json!({ "rich_text": [{ "text": { "content": authors } }] }),
        );
    }

    Value::Object(properties)
}

/// Groups highlights by section name, preserving first-appearance order.
/// Empty section names group under [`UNSECTIONED_LABEL`].
#[must_use]
pub fn group_by_section(highlights: &[Highlight]) -> Vec<(String, Vec<&Highlight>)> {
    let mut groups: Vec<(String, Vec<&Highlight>)> = Vec::new();

    for highlight in highlights {
        let name = if highlight.section.is_empty() {
            UNSECTIONED_LABEL
        } else {
            highlight.section.as_str()
        };
        match groups.iter_mut().find(|(existing, _)| existing.as_str() == name) {
            Some((_, members)) => members.push(highlight),
            None => groups.push((name.to_string(), vec![highlight])),
        }
    }

    groups
}

/// Heading block opening a named section on the page.
#[must_use]
pub fn section_heading_block(name: &str) -> Value {
    json!({
        "object": "block",
        "type": "heading_2",
        "heading_2": {
            "rich_text": [{ "type": "text", "text": { "content": name } }],
            "color": "default"
        }
    })
}

/// The two blocks one highlight contributes: its heading line and its
/// color-annotated passage text.
#[must_use]
pub fn highlight_blocks(highlight: &Highlight) -> [Value; 2] {
    [
        json!({
            "object": "block",
            "type": "heading_3",
            "heading_3": {
                "rich_text": [{ "type": "text", "text": { "content": highlight.heading.as_str() } }],
                "color": "default"
            }
        }),
        json!({
            "object": "block",
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{
                    "type": "text",
                    "text": { "content": highlight.text.as_str() },
                    "annotations": { "color": map_highlight_color(&highlight.highlight_color) }
                }]
            }
        }),
    ]
}

/// All content blocks for a record, chunked into append-request batches.
///
/// Each section opens with its own single-block heading batch — the
/// fallback group included, under [`UNSECTIONED_LABEL`] — then its
/// highlights follow in batches of at most [`MAX_BLOCKS_PER_REQUEST`]
/// blocks. An empty record yields no batches.
#[must_use]
pub fn block_batches(record: &BookRecord) -> Vec<Vec<Value>> {
    let mut batches = Vec::new();

    for (name, highlights) in group_by_section(&record.highlights) {
        batches.push(vec![section_heading_block(&name)]);

        for chunk in highlights.chunks(HIGHLIGHTS_PER_BATCH) {
            batches.push(chunk.iter().flat_map(|h| highlight_blocks(h)).collect());
        }
    }

    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(section: &str, heading: &str, color: &str) -> Highlight {
        Highlight {
            section: section.to_string(),
            heading: heading.to_string(),
            text: format!("text for {heading}"),
            highlight_color: color.to_string(),
        }
    }

    #[test]
    fn maps_known_colors_and_defaults_the_rest() {
        assert_eq!(map_highlight_color("yellow"), "yellow_background");
        assert_eq!(map_highlight_color("blue"), "blue_background");
        assert_eq!(map_highlight_color("pink"), "pink_background");
        assert_eq!(map_highlight_color("orange"), "orange_background");
        assert_eq!(map_highlight_color("chartreuse"), "default");
        assert_eq!(map_highlight_color("default"), "default");
    }

    #[test]
    fn groups_preserve_first_appearance_order() {
        let highlights = vec![
            highlight("Two", "a", "default"),
            highlight("One", "b", "default"),
            highlight("Two", "c", "default"),
            highlight("", "d", "default"),
        ];
        let groups = group_by_section(&highlights);
        let names: Vec<&str> = groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Two", "One", UNSECTIONED_LABEL]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn paragraph_block_carries_mapped_color_annotation() {
        let [_, paragraph] = highlight_blocks(&highlight("S", "H", "pink"));
        assert_eq!(
            paragraph["paragraph"]["rich_text"][0]["annotations"]["color"],
            "pink_background"
        );
    }

    #[test]
    fn batches_stay_under_the_request_budget() {
        let highlights: Vec<Highlight> = (0..100)
            .map(|i| highlight("Section", &format!("h{i}"), "yellow"))
            .collect();
        let record = BookRecord {
            title: "Big Book".to_string(),
            authors: None,
            highlights,
        };

        let batches = block_batches(&record);
        // One heading batch plus ceil(100 / 45) = 3 highlight batches.
        assert_eq!(batches.len(), 4);
        assert!(batches.iter().all(|b| b.len() <= MAX_BLOCKS_PER_REQUEST));
        assert_eq!(batches[0].len(), 1);
        assert_eq!(batches[0][0]["type"], "heading_2");
        assert_eq!(batches[1].len(), 90);
        assert_eq!(batches[3].len(), 20);
    }

    #[test]
    fn unsectioned_highlights_open_with_the_fallback_heading() {
        let record = BookRecord {
            title: "A Book".to_string(),
            authors: None,
            highlights: vec![highlight("", "h1", "default")],
        };

        let batches = block_batches(&record);
        assert_eq!(batches.len(), 2);
        assert_eq!(
            batches[0][0]["heading_2"]["rich_text"][0]["text"]["content"],
            UNSECTIONED_LABEL
        );
        assert_eq!(batches[1].len(), 2);
    }

    #[test]
    fn properties_include_authors_only_when_configured_and_present() {
        let record = BookRecord {
            title: "A Book".to_string(),
            authors: Some("An Author".to_string()),
            highlights: Vec::new(),
        };

        let with = page_properties(&record, "Name", Some("Author"));
        assert_eq!(with["Name"]["title"][0]["text"]["content"], "A Book");
        assert_eq!(with["Author"]["rich_text"][0]["text"]["content"], "An Author");

        let without_property = page_properties(&record, "Name", None);
        assert!(without_property.get("Author").is_none());

        let anonymous = BookRecord { authors: None, ..record };
        let without_authors = page_properties(&anonymous, "Name", Some("Author"));
        assert!(without_authors.get("Author").is_none());
    }
}
