//! Parse-to-payload pipeline: a parsed record rendered into the batches
//! the delivery layer would post.

use kindle_highlights::notion::{block_batches, page_properties};
use kindle_highlights::parse;

const EXPORT: &str = r#"
    <div class="bookTitle">Effective DevOps</div>
    <div class="authors">Jennifer Davis</div>
    <div class="sectionHeading">Chapter 3</div>
    <div class="noteHeading">Highlight (<span class="highlight_pink">pink</span>) - Page 23</div>
    <div class="noteText">The first passage</div>
    <div class="sectionHeading">Chapter 4</div>
    <div class="noteHeading">Highlight (<span class="highlight_yellow">yellow</span>) - Page 29</div>
    <div class="noteText">The second passage</div>
"#;

#[test]
fn parsed_record_renders_into_sectioned_batches() {
    let record = parse(EXPORT);
    assert_eq!(record.highlights.len(), 2);

    let batches = block_batches(&record);
    // heading batch + highlight batch, per section.
    assert_eq!(batches.len(), 4);
    assert_eq!(batches[0][0]["heading_2"]["rich_text"][0]["text"]["content"], "Chapter 3");
    assert_eq!(batches[1].len(), 2);
    assert_eq!(
        batches[1][1]["paragraph"]["rich_text"][0]["annotations"]["color"],
        "pink_background"
    );
    assert_eq!(batches[2][0]["heading_2"]["rich_text"][0]["text"]["content"], "Chapter 4");
    assert_eq!(
        batches[3][1]["paragraph"]["rich_text"][0]["annotations"]["color"],
        "yellow_background"
    );
}

#[test]
fn page_properties_carry_title_and_authors() {
    let record = parse(EXPORT);
    let properties = page_properties(&record, "Name", Some("Author"));

    assert_eq!(properties["Name"]["title"][0]["text"]["content"], "Effective DevOps");
    assert_eq!(
        properties["Author"]["rich_text"][0]["text"]["content"],
        "Jennifer Davis"
    );
}
