//! Integration tests for the render module orchestration.

use mdreflow::{
    load_document_from_str, render, ExtractedDocument, JsonFormat, Mdreflow, PageContent,
    PageFragments, RenderOptions, TextFragment,
};

fn sample_doc() -> ExtractedDocument {
    ExtractedDocument::from_pages(vec![
        PageFragments::from_fragments(
            1,
            vec![
                TextFragment::new("Hi", 30.0).with_ends_line(true),
                TextFragment::paragraph_break(),
                TextFragment::new("Opening paragraph on the first page.", 10.0),
            ],
        ),
        PageFragments::from_fragments(
            2,
            vec![TextFragment::new(
                "Second page body text, same height as the first page's body.",
                10.0,
            )],
        ),
        PageFragments::from_fragments(3, vec![TextFragment::paragraph_break()]),
    ])
}

#[test]
fn test_markdown_mode_concatenates_pages() {
    let markdown = mdreflow::to_markdown(&sample_doc()).unwrap();

    assert!(markdown.starts_with("# Hi"));
    assert!(markdown.contains("Opening paragraph on the first page."));
    assert!(markdown.contains("Second page body text"));
}

#[test]
fn test_page_mode_drops_blank_pages() {
    let pages = mdreflow::to_pages(&sample_doc()).unwrap();

    // Page 3 is all spacers and disappears.
    let numbers: Vec<u32> = pages.iter().map(|p| p.page).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn test_page_mode_uses_document_wide_baseline() {
    let pages = mdreflow::to_pages(&sample_doc()).unwrap();

    // "Hi" is a heading only relative to the whole document's height
    // sample; page 1 alone would not justify one.
    assert!(pages[0].content.starts_with("# Hi"));
}

#[test]
fn test_page_selection_preserves_numbers() {
    let options = RenderOptions::new().with_page_range(2..=3);
    let pages = render::to_pages(&sample_doc(), &options).unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].page, 2);
}

#[test]
fn test_page_json_shape() {
    let doc = ExtractedDocument::from_pages(vec![PageFragments::from_fragments(
        1,
        vec![TextFragment::new("Hello", 10.0)],
    )]);

    let compact = mdreflow::to_page_json(&doc, JsonFormat::Compact).unwrap();
    assert_eq!(compact, r#"[{"page":1,"content":"Hello"}]"#);

    let pretty = mdreflow::to_page_json(&doc, JsonFormat::Pretty).unwrap();
    assert!(pretty.contains("\n  "));
    let parsed: Vec<PageContent> = serde_json::from_str(&pretty).unwrap();
    assert_eq!(parsed, vec![PageContent::new(1, "Hello")]);
}

#[test]
fn test_load_extractor_dump_shapes() {
    // Bare array-of-pages shape with extractor field spellings.
    let nested = load_document_from_str(
        r#"[[{"str": "Hello", "height": 10, "hasEOL": false, "transform": [1, 0, 0, 1, 50, 700]}]]"#,
    )
    .unwrap();
    assert_eq!(mdreflow::to_markdown(&nested).unwrap(), "Hello");

    // Object shape with explicit page numbers.
    let numbered = load_document_from_str(
        r#"{"pages": [{"number": 5, "fragments": [{"text": "World", "height": 10}]}]}"#,
    )
    .unwrap();
    let pages = mdreflow::to_pages(&numbered).unwrap();
    assert_eq!(pages, vec![PageContent::new(5, "World")]);
}

#[test]
fn test_builder_end_to_end() {
    let result = Mdreflow::new()
        .sequential()
        .process(sample_doc());

    let markdown = result.to_markdown().unwrap();
    assert!(markdown.starts_with("# Hi"));

    let json = result.to_page_json(JsonFormat::Compact).unwrap();
    assert!(json.contains(r#""page":1"#));
    assert!(!json.contains(r#""page":3"#));
}

#[test]
fn test_missing_file_propagates_io_error() {
    let err = mdreflow::load_document("/nonexistent/fragments.json").unwrap_err();
    assert!(matches!(err, mdreflow::Error::Io(_)));
}

#[test]
fn test_no_structural_round_trip() {
    // Reflow is lossy: distinct fragment geometries can render to the
    // same markdown, so only structural properties are asserted.
    let wrapped = ExtractedDocument::from_pages(vec![PageFragments::from_fragments(
        1,
        vec![
            TextFragment::new("one", 10.0).with_ends_line(true),
            TextFragment::new("two", 10.0),
        ],
    )]);
    let flat = ExtractedDocument::from_pages(vec![PageFragments::from_fragments(
        1,
        vec![TextFragment::new("one two", 10.0)],
    )]);

    assert_eq!(
        mdreflow::to_markdown(&wrapped).unwrap(),
        mdreflow::to_markdown(&flat).unwrap()
    );
}
