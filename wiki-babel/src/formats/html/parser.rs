//! HTML import (display HTML → wiki document)
//!
//! The source is parsed with html5ever into an `RcDom` and walked once.
//! Recognized custom blocks become typed nodes; everything else is flattened
//! into markdown nodes, one per block element.

use crate::common::links::is_safe_href;
use crate::error::FormatError;
use crate::grammar::normalize::CalloutType;
use crate::ir::nodes::{Callout, Document, Image, Node, Video};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

/// Parse HTML into a wiki document
pub fn parse_from_html(source: &str) -> Result<Document, FormatError> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut source.as_bytes())
        .map_err(|e| FormatError::ParseError(format!("Failed to parse HTML: {e}")))?;

    let mut builder = DocumentBuilder::default();
    builder.walk_children(&dom.document);
    builder.flush();
    Ok(builder.doc)
}

const SKIPPED: &[&str] = &["head", "script", "style", "template", "title"];

const BLOCKS: &[&str] = &[
    "address",
    "article",
    "blockquote",
    "body",
    "div",
    "figure",
    "footer",
    "header",
    "html",
    "main",
    "nav",
    "ol",
    "p",
    "section",
    "table",
    "tr",
    "ul",
];

#[derive(Default)]
struct DocumentBuilder {
    doc: Document,
    /// Markdown text of the block currently being collected
    text: String,
}

impl DocumentBuilder {
    fn walk_children(&mut self, handle: &Handle) {
        let children = handle.children.borrow();
        let mut i = 0;
        while i < children.len() {
            let child = &children[i];
            if tag_name(child) == Some("img") {
                let (caption, consumed) = following_caption(&children[i + 1..]);
                self.push_image(child, caption);
                i += 1 + consumed;
                continue;
            }
            self.visit(child);
            i += 1;
        }
    }

    fn visit(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Text { contents } => self.push_text(&contents.borrow()),
            NodeData::Element { .. } => self.visit_element(handle),
            NodeData::Document => self.walk_children(handle),
            _ => {}
        }
    }

    fn visit_element(&mut self, handle: &Handle) {
        let Some(tag) = tag_name(handle) else {
            return;
        };

        if SKIPPED.contains(&tag) {
            return;
        }

        if tag == "aside" && has_class(handle, "callout") {
            self.flush();
            self.doc.push(Node::Callout(callout_from_aside(handle)));
            return;
        }

        match (tag, attr(handle, "data-type").as_deref()) {
            ("div", Some("callout-block")) => {
                self.flush();
                self.doc.push(Node::Callout(callout_from_attrs(handle)));
                return;
            }
            ("div", Some("video-block")) => {
                self.flush();
                let src = attr(handle, "data-src").unwrap_or_default();
                let alt = attr(handle, "data-alt").unwrap_or_default();
                self.push_video(src, alt);
                return;
            }
            _ => {}
        }

        match tag {
            "video" => {
                self.flush();
                let src = attr(handle, "src")
                    .filter(|s| !s.is_empty())
                    .or_else(|| first_source(handle))
                    .unwrap_or_default();
                let alt = attr(handle, "title").unwrap_or_default();
                self.push_video(src, alt);
            }
            "img" => self.push_image(handle, None),
            "a" => self.visit_link(handle),
            "br" => self.text.push('\n'),
            "strong" | "b" => self.wrap_inline(handle, "**"),
            "em" | "i" => self.wrap_inline(handle, "*"),
            "code" => self.wrap_inline(handle, "`"),
            "pre" => {
                self.flush();
                let mut code = String::new();
                raw_text(handle, &mut code);
                self.text = format!("```\n{}\n```", code.trim_end_matches('\n'));
                self.flush();
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush();
                let level = tag[1..].parse::<usize>().unwrap_or(1);
                self.text.push_str(&"#".repeat(level));
                self.text.push(' ');
                self.walk_children(handle);
                self.flush();
            }
            "li" => {
                self.flush();
                self.text.push_str("- ");
                self.walk_children(handle);
                self.flush();
            }
            _ if BLOCKS.contains(&tag) => {
                self.flush();
                self.walk_children(handle);
                self.flush();
            }
            _ => self.walk_children(handle),
        }
    }

    fn visit_link(&mut self, handle: &Handle) {
        match attr(handle, "href") {
            Some(href) if is_safe_href(&href) => {
                self.text.push('[');
                self.walk_children(handle);
                self.text.push_str("](");
                self.text.push_str(&href);
                self.text.push(')');
            }
            Some(href) => {
                debug!(href = %href, "dropping unsafe link target");
                self.walk_children(handle);
            }
            None => self.walk_children(handle),
        }
    }

    fn wrap_inline(&mut self, handle: &Handle, marker: &str) {
        self.text.push_str(marker);
        self.walk_children(handle);
        self.text.push_str(marker);
    }

    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !self.text.is_empty() && !self.text.ends_with(&[' ', '\n'][..]) {
                    self.text.push(' ');
                }
            } else {
                self.text.push(ch);
            }
        }
    }

    fn push_image(&mut self, handle: &Handle, caption: Option<String>) {
        let src = attr(handle, "src").unwrap_or_default();
        if src.is_empty() || !is_safe_href(&src) {
            debug!(src = %src, "skipping image without a usable source");
            return;
        }
        self.flush();
        let mut image = Image::new(src, attr(handle, "alt").unwrap_or_default());
        image.title = attr(handle, "title").filter(|t| !t.is_empty());
        image.caption = caption
            .or_else(|| attr(handle, "caption"))
            .filter(|c| !c.is_empty());
        self.doc.push(Node::Image(image));
    }

    fn push_video(&mut self, src: String, alt: String) {
        if src.is_empty() || !is_safe_href(&src) {
            debug!(src = %src, "skipping video without a usable source");
            return;
        }
        self.doc.push(Node::Video(Video::new(src, alt)));
    }

    /// Emit the collected text as a markdown node.
    fn flush(&mut self) {
        let text = std::mem::take(&mut self.text);
        let text = text.trim();
        if !text.is_empty() {
            self.doc.push(Node::markdown(format!("{text}\n\n")));
        }
    }
}

fn callout_from_aside(handle: &Handle) -> Callout {
    let callout_type = class_list(handle)
        .iter()
        .filter_map(|class| class.strip_prefix("callout-"))
        .find_map(CalloutType::from_word)
        .or_else(|| attr(handle, "data-callout-type").and_then(|t| CalloutType::from_word(&t)))
        .unwrap_or_default();

    let title = find_descendant(handle, &|h| has_class(h, "callout-title"))
        .and_then(|title| find_descendant(&title, &|h| tag_name(h) == Some("span")))
        .map(|span| text_content(&span))
        .unwrap_or_default();

    let content = find_descendant(handle, &|h| has_class(h, "callout-content"))
        .map(|content| text_content(&content))
        .unwrap_or_default();

    callout(callout_type, title, content)
}

fn callout_from_attrs(handle: &Handle) -> Callout {
    let callout_type = attr(handle, "data-callout-type")
        .and_then(|t| CalloutType::from_word(&t))
        .unwrap_or_default();
    callout(
        callout_type,
        attr(handle, "data-title").unwrap_or_default(),
        attr(handle, "data-content").unwrap_or_default(),
    )
}

/// A title equal to the type's default is stored as empty.
fn callout(callout_type: CalloutType, title: String, content: String) -> Callout {
    let title = title.trim();
    let title = if title == callout_type.default_title() {
        ""
    } else {
        title
    };
    Callout::new(callout_type, title, content.trim())
}

/// Caption from an `<em>` directly after an image, skipping blank text.
fn following_caption(rest: &[Handle]) -> (Option<String>, usize) {
    for (i, sibling) in rest.iter().enumerate() {
        match &sibling.data {
            NodeData::Text { contents } if contents.borrow().trim().is_empty() => continue,
            NodeData::Element { .. } if tag_name(sibling) == Some("em") => {
                return (Some(text_content(sibling)), i + 1);
            }
            _ => break,
        }
    }
    (None, 0)
}

fn first_source(handle: &Handle) -> Option<String> {
    find_descendant(handle, &|h| {
        tag_name(h) == Some("source") && attr(h, "src").is_some_and(|s| !s.is_empty())
    })
    .and_then(|source| attr(&source, "src"))
}

fn tag_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

fn class_list(handle: &Handle) -> Vec<String> {
    attr(handle, "class")
        .map(|classes| classes.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

fn has_class(handle: &Handle, class: &str) -> bool {
    class_list(handle).iter().any(|c| c == class)
}

fn find_descendant(handle: &Handle, matches: &dyn Fn(&Handle) -> bool) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if matches(child) {
            return Some(child.clone());
        }
        if let Some(found) = find_descendant(child, matches) {
            return Some(found);
        }
    }
    None
}

/// Text of a subtree, whitespace collapsed, paragraphs separated by a blank line.
fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out.trim().to_string()
}

fn collect_text(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                for ch in contents.borrow().chars() {
                    if ch.is_whitespace() {
                        if !out.is_empty() && !out.ends_with(&[' ', '\n'][..]) {
                            out.push(' ');
                        }
                    } else {
                        out.push(ch);
                    }
                }
            }
            NodeData::Element { .. } => {
                let block = tag_name(child).is_some_and(|t| BLOCKS.contains(&t) || t == "li");
                if block && !out.trim().is_empty() {
                    let trimmed = out.trim_end().len();
                    out.truncate(trimmed);
                    out.push_str("\n\n");
                }
                collect_text(child, out);
            }
            _ => {}
        }
    }
}

fn raw_text(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            out.push_str(&contents.borrow());
        } else {
            raw_text(child, out);
        }
    }
}
