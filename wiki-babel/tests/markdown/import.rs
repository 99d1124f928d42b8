//! Import tests for Markdown format (Markdown → document)

use crate::common::{fixture, type_names};
use wiki_babel::format::Format;
use wiki_babel::formats::markdown::MarkdownFormat;
use wiki_babel::grammar::normalize::CalloutType;
use wiki_babel::{parse_markdown, Callout, Image, Node, Video};

#[test]
fn test_kitchensink_node_sequence() {
    let doc = MarkdownFormat
        .parse(&fixture("kitchensink.md"))
        .expect("Should parse markdown");

    assert_eq!(
        type_names(&doc.nodes),
        vec!["markdown", "calloutBlock", "image", "videoBlock", "calloutBlock", "markdown"]
    );
    assert_eq!(
        doc.nodes[1],
        Node::Callout(Callout::new(
            CalloutType::Tip,
            "Pro Tip",
            "Use **keyboard shortcuts** to move faster."
        ))
    );
    assert_eq!(
        doc.nodes[2],
        Node::Image(
            Image::new("/files/arch.png", "Architecture")
                .with_title("Overview")
                .with_caption("Figure 1: System architecture")
        )
    );
    assert_eq!(doc.nodes[3], Node::Video(Video::new("/files/demo.mp4", "Demo")));
    assert_eq!(
        doc.nodes[4],
        Node::Callout(Callout::new(CalloutType::Caution, "", "Back up before upgrading."))
    );
}

#[test]
fn test_warning_and_caution_parse_identically() {
    let warning = parse_markdown(":::warning\nX\n:::");
    let caution = parse_markdown(":::caution\nX\n:::");
    assert_eq!(warning, caution);
    assert_eq!(
        warning.nodes,
        vec![Node::Callout(Callout::new(CalloutType::Caution, "", "X"))]
    );
}

#[test]
fn test_unknown_callout_type_stays_markdown() {
    let doc = parse_markdown(":::bogus\nX\n:::");
    assert_eq!(doc.nodes, vec![Node::markdown(":::bogus\nX\n:::")]);
}

#[test]
fn test_media_disambiguation() {
    assert_eq!(
        parse_markdown("![t](clip.mp4)").nodes,
        vec![Node::Video(Video::new("clip.mp4", "t"))]
    );
    assert_eq!(
        parse_markdown("![t](pic.png)").nodes,
        vec![Node::Image(Image::new("pic.png", "t"))]
    );
    assert_eq!(
        parse_markdown("![t](clip.MP4)").nodes,
        vec![Node::Video(Video::new("clip.MP4", "t"))]
    );
}

#[test]
fn test_caption_must_be_adjacent() {
    assert_eq!(
        parse_markdown("![a](x.png)\n*cap*").nodes,
        vec![Node::Image(Image::new("x.png", "a").with_caption("cap"))]
    );
    assert_eq!(
        parse_markdown("![a](x.png)\n\n*cap*").nodes,
        vec![
            Node::Image(Image::new("x.png", "a")),
            Node::markdown("\n\n*cap*"),
        ]
    );
}

#[test]
fn test_image_title_is_optional() {
    assert_eq!(
        parse_markdown("![a](x.png \"T\")").nodes,
        vec![Node::Image(Image::new("x.png", "a").with_title("T"))]
    );
    let untitled = parse_markdown("![a](x.png)");
    assert_eq!(untitled.nodes, vec![Node::Image(Image::new("x.png", "a"))]);
}

#[test]
fn test_crlf_input() {
    let doc = parse_markdown("Intro\r\n\r\n:::note[Hi]\r\nBody\r\n:::\r\n");
    assert_eq!(
        doc.nodes,
        vec![
            Node::markdown("Intro\n\n"),
            Node::Callout(Callout::new(CalloutType::Note, "Hi", "Body")),
        ]
    );
}

#[test]
fn test_nested_fence_closes_at_first_marker() {
    let doc = parse_markdown(":::note\nouter\n:::tip\ninner\n:::\n:::");
    assert_eq!(
        doc.nodes[0],
        Node::Callout(Callout::new(CalloutType::Note, "", "outer"))
    );
    assert_eq!(doc.nodes.len(), 2);
}

#[test]
fn test_plain_markdown_is_untouched() {
    let md = "# Title\n\n- one\n- two\n\n`code` and [link](https://example.com)\n";
    assert_eq!(parse_markdown(md).nodes, vec![Node::markdown(md)]);
}
