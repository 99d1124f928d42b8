//! Markdown serialization (wiki document → Markdown)
//!
//! Each node kind has a renderer that inverts its matcher and mapper, up to
//! normalization. Callout and video renderings end with a blank line; image
//! renderings do not, so a caption stays on the line right after the image.

use crate::error::FormatError;
use crate::ir::nodes::{Callout, Document, Image, Markdown, Node, Video};

/// Serialize a document to Markdown
pub fn serialize_to_markdown(doc: &Document) -> Result<String, FormatError> {
    Ok(render_document(doc))
}

/// Concatenate node renderings in document order.
///
/// - Markdown nodes are written verbatim, minus leading newlines when the
///   output already ends in a blank line.
/// - A block node that would otherwise be glued onto the end of the previous
///   block node's line gets a blank line first.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    let mut previous: Option<&Node> = None;

    for node in doc {
        match node {
            Node::Markdown(markdown) => {
                if out.ends_with("\n\n") {
                    out.push_str(markdown.source.trim_start_matches('\n'));
                } else {
                    out.push_str(&markdown.source);
                }
            }
            _ => {
                let after_block = previous.is_some_and(|p| !matches!(p, Node::Markdown(_)));
                if after_block && !out.is_empty() && !out.ends_with('\n') {
                    out.push_str("\n\n");
                }
                out.push_str(&render_node(node));
            }
        }
        previous = Some(node);
    }

    out
}

/// Render a single node.
pub fn render_node(node: &Node) -> String {
    match node {
        Node::Callout(callout) => render_callout(callout),
        Node::Image(image) => render_image(image),
        Node::Video(video) => render_video(video),
        Node::Markdown(Markdown { source }) => source.clone(),
    }
}

/// `:::type[title]\ncontent\n:::` plus a blank line; the bracket is omitted
/// for an empty title.
pub fn render_callout(callout: &Callout) -> String {
    let kind = callout.callout_type.as_str();
    if callout.title.is_empty() {
        format!(":::{kind}\n{}\n:::\n\n", callout.content)
    } else {
        format!(":::{kind}[{}]\n{}\n:::\n\n", callout.title, callout.content)
    }
}

/// `![alt](src "title")`, then `\n*caption*` when a caption is set.
///
/// Empty titles never produce empty quotes and an empty `src` still yields a
/// syntactically valid `![]()`.
pub fn render_image(image: &Image) -> String {
    let title = image.title.as_deref().unwrap_or("");
    let mut md = if title.is_empty() {
        format!("![{}]({})", image.alt, image.src)
    } else {
        format!("![{}]({} \"{}\")", image.alt, image.src, title)
    };

    if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
        md.push_str("\n*");
        md.push_str(caption);
        md.push('*');
    }

    md
}

/// `![alt](src)` plus a blank line. Videos carry no title or caption.
pub fn render_video(video: &Video) -> String {
    format!("![{}]({})\n\n", video.alt, video.src)
}
