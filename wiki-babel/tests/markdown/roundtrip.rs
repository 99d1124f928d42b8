//! Property-based round-trip tests
//!
//! Rendering a node and parsing the result must give the node back, and a
//! parse → render pass over canonical source must be a fixed point.

use proptest::prelude::*;
use wiki_babel::grammar::normalize::CalloutType;
use wiki_babel::{parse_markdown, to_markdown, Callout, Document, Image, Node, Video};

fn render(node: &Node) -> String {
    to_markdown(&Document::with_nodes(vec![node.clone()]))
}

fn callout_type_strategy() -> impl Strategy<Value = CalloutType> {
    prop::sample::select(CalloutType::ALL.to_vec())
}

/// Titles may be empty; brackets never appear inside them.
fn title_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Za-z0-9][A-Za-z0-9 ]{0,15}",]
}

/// One or more lines, no surrounding whitespace, never a `:::` fence.
fn content_strategy() -> impl Strategy<Value = String> {
    let line = prop_oneof!["[A-Za-z0-9]", "[A-Za-z0-9][A-Za-z0-9 .,*_`-]{0,20}[A-Za-z0-9.]",];
    prop::collection::vec(line, 1..4).prop_map(|lines| lines.join("\n"))
}

fn image_strategy() -> impl Strategy<Value = Image> {
    (
        "[a-z0-9/_-]{1,12}\\.(png|jpg|gif|svg)",
        "[A-Za-z0-9 ]{0,10}",
        prop::option::of("[A-Za-z0-9][A-Za-z0-9 ]{0,10}"),
        prop::option::of("[A-Za-z0-9][A-Za-z0-9 :]{0,12}"),
    )
        .prop_map(|(src, alt, title, caption)| Image {
            src,
            alt,
            title,
            caption,
        })
}

fn video_strategy() -> impl Strategy<Value = Video> {
    (
        "[a-z0-9/_-]{1,12}\\.(mp4|webm|ogg|MOV|Mkv|m4v|avi)",
        "[A-Za-z0-9 ]{0,10}",
    )
        .prop_map(|(src, alt)| Video::new(src, alt))
}

/// Canonical source fragments joined by blank lines.
fn document_source_strategy() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        "Plain paragraph.",
        "# Heading",
        ":::warning\nCareful\n:::",
        ":::tip[Hint]\nLine one\nLine two\n:::",
        ":::bogus\nX\n:::",
        "![a](x.png \"T\")\n*cap*",
        "![a](x.png)",
        "![v](clip.MP4)",
        "*emphasis only*",
        "```md\n:::note\nHi\n:::\n```",
        "~~~\n![v](clip.mp4)\n~~~",
    ]);
    prop::collection::vec(fragment, 0..8).prop_map(|parts| parts.join("\n\n"))
}

#[test]
fn test_fenced_examples_survive_round_trip() {
    let src = "Syntax:\n\n```md\n:::note\nHi\n:::\n```\n\n```\n![a](clip.mp4)\n```\n";
    let doc = parse_markdown(src);
    assert_eq!(doc.nodes, vec![Node::markdown(src)]);
    assert_eq!(to_markdown(&doc), src);
}

#[test]
fn test_unclosed_fence_swallows_the_rest() {
    let src = "```\n:::tip\nx\n:::\n\n![a](x.png)\n";
    assert_eq!(parse_markdown(src).nodes, vec![Node::markdown(src)]);
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_callout_round_trip(
            callout_type in callout_type_strategy(),
            title in title_strategy(),
            content in content_strategy(),
        ) {
            let node = Node::Callout(Callout::new(callout_type, title, content));
            let doc = parse_markdown(&render(&node));
            prop_assert_eq!(doc.nodes, vec![node]);
        }

        #[test]
        fn test_caution_is_never_rendered_as_warning(content in content_strategy()) {
            let doc = parse_markdown(&format!(":::warning\n{content}\n:::"));
            let md = to_markdown(&doc);
            prop_assert!(md.starts_with(":::caution\n"), "got {:?}", md);
            prop_assert!(!md.contains(":::warning"));
        }

        #[test]
        fn test_image_round_trip(image in image_strategy()) {
            let node = Node::Image(image);
            let md = render(&node);
            prop_assert!(!md.contains("\"\""));
            prop_assert_eq!(parse_markdown(&md).nodes, vec![node]);
        }

        #[test]
        fn test_video_round_trip(video in video_strategy()) {
            let node = Node::Video(video);
            prop_assert_eq!(parse_markdown(&render(&node)).nodes, vec![node]);
        }

        #[test]
        fn test_blocks_inside_fences_stay_text(
            callout_type in callout_type_strategy(),
            content in content_strategy(),
            video in video_strategy(),
        ) {
            let callout = render(&Node::Callout(Callout::new(callout_type, "", content)));
            let video = render(&Node::Video(video));
            let source = format!("Example:\n\n```md\n{callout}{video}\n```\n");
            let doc = parse_markdown(&source);
            prop_assert_eq!(&doc.nodes, &vec![Node::markdown(source.as_str())]);
            prop_assert_eq!(to_markdown(&doc), source);
        }

        #[test]
        fn test_parse_render_is_idempotent(source in document_source_strategy()) {
            let once = to_markdown(&parse_markdown(&source));
            let twice = to_markdown(&parse_markdown(&once));
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(parse_markdown(&once), parse_markdown(&twice));
        }
    }
}
