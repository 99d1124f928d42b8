//! CLI-specific transforms
//!
//! This module defines the views `wiki inspect` can print. Each transform is a
//! stage + format combination (e.g., "node-json", "token-simple").
//!
//! ## Transform Pipeline
//!
//! 1. **Scanning** - Markdown → token stream with fallthrough text
//!    - `token-simple`: one line per segment with its byte range
//!    - `token-json`: segments as JSON, token fields included
//!
//! 2. **Mapping** - Tokens → document nodes
//!    - `node-json`: the document as JSON (default)
//!    - `node-treeviz`: one line per node with its key attributes
//!
//! ## Extra Parameters
//!
//! - `full`: when "true", `node-treeviz` prints markdown nodes in full
//!   instead of their first line.
//!
//! Example: `wiki inspect page.md node-treeviz --extra-full`

use serde_json::json;
use std::collections::HashMap;
use wiki_babel::formats::markdown::parser::normalize_line_endings;
use wiki_babel::grammar::{scan, Segment};
use wiki_babel::ir::nodes::{Document, Node};
use wiki_babel::parse_markdown;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] =
    &["token-simple", "token-json", "node-json", "node-treeviz"];

/// Transform used when `inspect` is given none.
pub const DEFAULT_TRANSFORM: &str = "node-json";

/// Execute a named transform on wiki Markdown source
///
/// # Examples
///
/// ```ignore
/// let params = HashMap::new();
/// let output = execute_transform(":::note\nHi\n:::", "node-treeviz", &params)?;
/// assert!(output.contains("calloutBlock"));
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "token-simple" => Ok(segments_to_simple(source)),
        "token-json" => serde_json::to_string_pretty(&segments_to_json(source))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "node-json" => serde_json::to_string_pretty(&parse_markdown(source))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "node-treeviz" => {
            let full = extra_params.get("full").is_some_and(|v| v == "true");
            Ok(to_treeviz(&parse_markdown(source), full))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

/// Segments paired with their byte ranges in the normalized source.
fn segments_with_ranges(source: &str) -> Vec<(String, std::ops::Range<usize>, serde_json::Value)> {
    let mut offset = 0;
    scan(source)
        .map(|segment| {
            let (name, len, value) = match segment {
                Segment::Token(token) => (
                    token.kind().as_str().to_string(),
                    token.raw().len(),
                    serde_json::to_value(&token).unwrap_or(serde_json::Value::Null),
                ),
                Segment::Text(text) => ("text".to_string(), text.len(), json!({ "text": text })),
            };
            let range = offset..offset + len;
            offset += len;
            (name, range, value)
        })
        .collect()
}

fn segments_to_simple(source: &str) -> String {
    let source = normalize_line_endings(source);
    segments_with_ranges(&source)
        .into_iter()
        .map(|(name, range, _)| format!("{name} {}..{}", range.start, range.end))
        .collect::<Vec<_>>()
        .join("\n")
}

fn segments_to_json(source: &str) -> serde_json::Value {
    let source = normalize_line_endings(source);
    json!(segments_with_ranges(&source)
        .into_iter()
        .map(|(name, range, value)| {
            json!({
                "segment": name,
                "start": range.start,
                "end": range.end,
                "value": value,
            })
        })
        .collect::<Vec<_>>())
}

fn to_treeviz(doc: &Document, full: bool) -> String {
    let mut output = format!("⧉ document ({} nodes)\n", doc.len());
    let last = doc.len().saturating_sub(1);
    for (i, node) in doc.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        output.push_str(&format!("{branch} {}\n", describe_node(node, full)));
    }
    output
}

fn describe_node(node: &Node, full: bool) -> String {
    match node {
        Node::Callout(callout) => format!(
            "{} {} \"{}\"",
            node.type_name(),
            callout.callout_type,
            callout.display_title()
        ),
        Node::Image(image) => {
            let mut line = format!("{} {}", node.type_name(), image.src);
            if let Some(title) = &image.title {
                line.push_str(&format!(" title=\"{title}\""));
            }
            if let Some(caption) = &image.caption {
                line.push_str(&format!(" caption=\"{caption}\""));
            }
            line
        }
        Node::Video(video) => format!("{} {}", node.type_name(), video.src),
        Node::Markdown(markdown) => {
            let text = markdown.source.trim();
            let shown = if full {
                text.to_string()
            } else {
                match text.split_once('\n') {
                    Some((first, _)) => format!("{first}…"),
                    None => text.to_string(),
                }
            };
            format!("{} {shown:?}", node.type_name())
        }
    }
}
