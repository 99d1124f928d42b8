//! Import tests for HTML format (HTML → document)

use crate::common::{fixture, type_names};
use wiki_babel::format::Format;
use wiki_babel::formats::html::HtmlFormat;
use wiki_babel::grammar::normalize::CalloutType;
use wiki_babel::{parse_markdown, Callout, Image, Node, Video};

#[test]
fn test_display_html_round_trip() {
    let doc = parse_markdown(&fixture("kitchensink.md"));
    let html = HtmlFormat::default().serialize(&doc).unwrap();
    let imported = HtmlFormat::default().parse(&html).expect("Should parse html");

    assert_eq!(
        type_names(&imported.nodes),
        vec![
            "markdown",
            "markdown",
            "calloutBlock",
            "image",
            "videoBlock",
            "calloutBlock",
            "markdown"
        ]
    );
    assert_eq!(imported.nodes[0], Node::markdown("# Getting Started\n\n"));
    assert_eq!(
        imported.nodes[2],
        Node::Callout(Callout::new(
            CalloutType::Tip,
            "Pro Tip",
            "Use keyboard shortcuts to move faster."
        ))
    );
    assert_eq!(imported.nodes[3], doc.nodes[2]);
    assert_eq!(imported.nodes[4], doc.nodes[3]);
    assert_eq!(imported.nodes[5], doc.nodes[4]);
}

#[test]
fn test_editor_html() {
    let html = r#"<p>See <a href="https://example.com/docs">the docs</a>.</p>
<div data-type="callout-block" data-callout-type="danger" data-title="" data-content="Never do this"></div>
<img src="/files/a.png" alt="A" caption="Shown below">
<video title="Walkthrough"><source src="/files/walk.webm"></video>"#;
    let doc = HtmlFormat::default().parse(html).unwrap();

    assert_eq!(
        doc.nodes,
        vec![
            Node::markdown("See [the docs](https://example.com/docs).\n\n"),
            Node::Callout(Callout::new(CalloutType::Danger, "", "Never do this")),
            Node::Image(Image::new("/files/a.png", "A").with_caption("Shown below")),
            Node::Video(Video::new("/files/walk.webm", "Walkthrough")),
        ]
    );
}

#[test]
fn test_javascript_links_lose_their_target() {
    let doc = HtmlFormat::default()
        .parse(r#"<p><a href="jAvAsCrIpT:alert(1)">click</a></p>"#)
        .unwrap();

    assert_eq!(doc.nodes, vec![Node::markdown("click\n\n")]);
}
