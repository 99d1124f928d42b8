//! Export tests for HTML format (document → HTML)

use crate::common::fixture;
use insta::assert_snapshot;
use std::collections::HashMap;
use wiki_babel::format::Format;
use wiki_babel::formats::html::HtmlFormat;
use wiki_babel::{parse_markdown, Document, Node, Video};

fn md_to_html(md: &str) -> String {
    HtmlFormat::default()
        .serialize(&parse_markdown(md))
        .expect("Should serialize html")
}

#[test]
fn test_kitchensink_fragment() {
    let html = md_to_html(&fixture("kitchensink.md"));

    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Getting Started</h1>"));
    assert!(html.contains("<aside class=\"callout callout-tip\" data-type=\"callout-block\" data-callout-type=\"tip\">"));
    assert!(html.contains("<span>Pro Tip</span>"));
    assert!(html.contains("<strong>keyboard shortcuts</strong>"));
    assert!(html.contains("<aside class=\"callout callout-caution\""));
    assert!(html.contains("<span>Caution</span>"));
    assert!(html.contains(
        "<p><img src=\"/files/arch.png\" alt=\"Architecture\" title=\"Overview\"><em>Figure 1: System architecture</em></p>"
    ));
    assert!(html.contains("data-src=\"/files/demo.mp4\""));
    assert!(html.contains("<p>Closing paragraph.</p>"));
}

#[test]
fn test_video_markup() {
    let doc = Document::with_nodes(vec![Node::Video(Video::new("clip.mp4", "Demo"))]);
    let html = HtmlFormat::default().serialize(&doc).unwrap();

    assert_snapshot!(html.trim_end(), @r#"<div data-type="video-block" data-src="clip.mp4" data-alt="Demo"><video src="clip.mp4" controls preload="metadata" style="max-width: 100%; border-radius: 8px;"><source src="clip.mp4"></video></div>"#);
}

#[test]
fn test_standalone_option() {
    let mut options = HashMap::new();
    options.insert("standalone".to_string(), "true".to_string());
    let html = HtmlFormat::default()
        .serialize_with_options(&parse_markdown(":::note\nHi\n:::"), &options)
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("<div class=\"wiki-document\">"));
    assert!(html.contains("callout-note"));
}

#[test]
fn test_unknown_option_is_rejected() {
    let mut options = HashMap::new();
    options.insert("theme".to_string(), "dark".to_string());
    let result = HtmlFormat::default().serialize_with_options(&Document::new(), &options);

    assert!(result.is_err());
}

#[test]
fn test_markdown_extensions() {
    let html = md_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n- [x] done\n\n~~old~~\n");

    assert!(html.contains("<table>"));
    assert!(html.contains("type=\"checkbox\""));
    assert!(html.contains("<del>old</del>"));
}

#[test]
fn test_references_and_footnotes_span_blocks() {
    let md = "See [the docs][docs] and note[^1].\n\n:::note\nHi\n:::\n\n[docs]: https://example.com\n\n[^1]: Footnote text.\n";
    let html = md_to_html(md);

    assert!(html.contains("<a href=\"https://example.com\">the docs</a>"), "{html}");
    assert!(html.contains("class=\"footnotes\""));
    assert!(html.contains("Footnote text."));
    assert!(!html.contains("[docs]"));
    let footnotes = html.find("class=\"footnotes\"").unwrap();
    assert!(html.find("<aside").unwrap() < footnotes);
}
