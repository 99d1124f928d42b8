//! Export tests for Markdown format (document → Markdown)

use crate::common::fixture;
use insta::assert_snapshot;
use wiki_babel::format::Format;
use wiki_babel::formats::markdown::MarkdownFormat;
use wiki_babel::grammar::normalize::CalloutType;
use wiki_babel::{parse_markdown, to_markdown, Callout, Document, Image, Node, Video};

#[test]
fn test_kitchensink_round_trip_canonicalizes_warning() {
    let source = fixture("kitchensink.md");
    let doc = parse_markdown(&source);
    let md = MarkdownFormat.serialize(&doc).expect("Should serialize");

    assert_eq!(md, source.replace(":::warning", ":::caution"));
}

#[test]
fn test_blocks_built_in_code() {
    let mut doc = Document::new();
    doc.push(Node::markdown("Intro\n\n"));
    doc.push(Node::Callout(Callout::new(CalloutType::Danger, "Stop", "Do not run this.")));
    doc.push(Node::Image(Image::new("/files/a.png", "A").with_caption("Caption")));
    doc.push(Node::Video(Video::new("/files/b.webm", "B")));
    doc.push(Node::Image(Image::new("/files/c.png", "C").with_title("")));

    assert_snapshot!(to_markdown(&doc), @r#"
    Intro

    :::danger[Stop]
    Do not run this.
    :::

    ![A](/files/a.png)
    *Caption*

    ![B](/files/b.webm)

    ![C](/files/c.png)
    "#);
}

#[test]
fn test_removing_a_node_keeps_neighbors_intact() {
    let mut doc = parse_markdown("Intro\n\n![v](a.mp4)\n\nOutro\n");
    let removed = doc.remove(1);

    assert_eq!(removed, Some(Node::Video(Video::new("a.mp4", "v"))));
    assert_eq!(to_markdown(&doc), "Intro\n\nOutro\n");
}
