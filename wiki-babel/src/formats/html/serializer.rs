//! HTML serialization (wiki document → display HTML)
//!
//! Custom blocks are written directly; markdown nodes and callout bodies are
//! rendered through comrak. Every attribute value and text taken from a node
//! is escaped.

use crate::error::FormatError;
use crate::formats::icons::callout_icon;
use crate::ir::nodes::{Callout, Document, Image, Node, Video};
use comrak::{markdown_to_html, ComrakOptions};
use std::collections::HashMap;

/// Options for HTML serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the body in a complete HTML document with embedded CSS
    pub standalone: bool,
    /// Emit the SVG icon in callout titles
    pub icons: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            standalone: false,
            icons: true,
        }
    }
}

impl HtmlOptions {
    /// Build options from `--extra-*` style key/value pairs.
    ///
    /// Recognized keys: `standalone`, `icons`. Anything else is rejected.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut options = HtmlOptions::default();
        for (key, value) in params {
            match key.as_str() {
                "standalone" => options.standalone = parse_flag(key, value)?,
                "icons" => options.icons = parse_flag(key, value)?,
                _ => {
                    return Err(FormatError::NotSupported(format!(
                        "Unknown html option '{key}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, FormatError> {
    match value {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(FormatError::SerializationError(format!(
            "Option '{key}' expects true or false, got '{value}'"
        ))),
    }
}

/// Serialize a document to HTML
///
/// The whole document goes through comrak in one pass, each custom block
/// standing in as a placeholder paragraph, so link reference definitions and
/// footnotes resolve across blocks. Placeholders are then swapped for the
/// block markup.
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> Result<String, FormatError> {
    let mut source = String::new();
    let mut blocks = Vec::new();

    for node in doc {
        let mut html = String::new();
        match node {
            Node::Markdown(markdown) => {
                source.push_str(&markdown.source);
                continue;
            }
            Node::Callout(callout) => render_callout_html(callout, options, &mut html),
            Node::Image(image) => render_image_html(image, &mut html),
            Node::Video(video) => render_video_html(video, &mut html),
        }

        if !source.is_empty() && !source.ends_with("\n\n") {
            source.push_str(if source.ends_with('\n') { "\n" } else { "\n\n" });
        }
        source.push_str(&placeholder(blocks.len()));
        source.push_str("\n\n");
        blocks.push(html);
    }

    let mut body = if source.is_empty() {
        String::new()
    } else {
        render_markdown_html(&source)
    };
    for (index, html) in blocks.iter().enumerate() {
        let marker = placeholder(index);
        let paragraph = format!("<p>{marker}</p>\n");
        body = if body.contains(&paragraph) {
            body.replacen(&paragraph, html, 1)
        } else {
            body.replacen(&marker, html, 1)
        };
    }

    if options.standalone {
        Ok(wrap_in_document(&body))
    } else {
        Ok(body)
    }
}

fn placeholder(index: usize) -> String {
    format!("\u{FFFC}wiki-block-{index}\u{FFFC}")
}

fn render_callout_html(callout: &Callout, options: &HtmlOptions, out: &mut String) {
    let kind = callout.callout_type.as_str();
    let icon = if options.icons {
        callout_icon(callout.callout_type)
    } else {
        ""
    };
    let content = callout.content.trim();
    let inner = if content.is_empty() {
        String::new()
    } else {
        render_markdown_html(content)
    };

    out.push_str(&format!(
        "<aside class=\"callout callout-{kind}\" data-type=\"callout-block\" data-callout-type=\"{kind}\">\n\
         <div class=\"callout-title\">{icon}<span>{}</span></div>\n\
         <div class=\"callout-content\">{inner}</div>\n\
         </aside>\n",
        html_escape(callout.display_title()),
    ));
}

fn render_image_html(image: &Image, out: &mut String) {
    out.push_str("<p><img src=\"");
    out.push_str(&html_escape(&image.src));
    out.push_str("\" alt=\"");
    out.push_str(&html_escape(&image.alt));
    out.push('"');
    if let Some(title) = image.title.as_deref().filter(|t| !t.is_empty()) {
        out.push_str(" title=\"");
        out.push_str(&html_escape(title));
        out.push('"');
    }
    out.push('>');
    if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
        out.push_str("<em>");
        out.push_str(&html_escape(caption));
        out.push_str("</em>");
    }
    out.push_str("</p>\n");
}

fn render_video_html(video: &Video, out: &mut String) {
    let src = html_escape(&video.src);
    let alt = html_escape(&video.alt);
    out.push_str(&format!(
        "<div data-type=\"video-block\" data-src=\"{src}\" data-alt=\"{alt}\">\
         <video src=\"{src}\" controls preload=\"metadata\" style=\"max-width: 100%; border-radius: 8px;\">\
         <source src=\"{src}\"></video></div>\n"
    ));
}

/// Render plain Markdown with the wiki's extensions enabled.
pub fn render_markdown_html(source: &str) -> String {
    markdown_to_html(source, &default_comrak_options())
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str) -> String {
    let baseline_css = include_str!("../../../css/baseline.css");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="wiki-babel">
  <style>
{baseline_css}
  </style>
</head>
<body>
<div class="wiki-document">
{body_html}
</div>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
