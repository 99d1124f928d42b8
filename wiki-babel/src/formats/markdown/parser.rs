//! Markdown parsing (Markdown → wiki document)
//!
//! Pipeline: Markdown string → line ending normalization → block scanner →
//! tokens → nodes. Text no rule claims is kept verbatim in markdown nodes;
//! whitespace-only gaps between blocks are separators and are dropped.

use crate::error::FormatError;
use crate::grammar::{scan, Segment};
use crate::ir::from_tokens::token_to_node;
use crate::ir::nodes::{Document, Node};
use std::borrow::Cow;

/// Parse Markdown into a document
///
/// Never fails: unrecognized or malformed blocks fall through as markdown
/// nodes. The `Result` keeps the signature uniform with the other formats.
pub fn parse_from_markdown(source: &str) -> Result<Document, FormatError> {
    Ok(parse_document(source))
}

/// Parse Markdown into a document.
pub fn parse_document(source: &str) -> Document {
    let source = normalize_line_endings(source);
    let mut doc = Document::new();
    let mut pending = String::new();

    for segment in scan(&source) {
        match segment {
            Segment::Text(text) => pending.push_str(text),
            Segment::Token(token) => {
                flush_text(&mut doc, &mut pending);
                doc.push(token_to_node(&token));
            }
        }
    }
    flush_text(&mut doc, &mut pending);

    doc
}

/// `\r\n` and lone `\r` become `\n`.
pub fn normalize_line_endings(source: &str) -> Cow<'_, str> {
    if source.contains('\r') {
        Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(source)
    }
}

fn flush_text(doc: &mut Document, pending: &mut String) {
    if !pending.trim().is_empty() {
        doc.push(Node::markdown(pending.as_str()));
    }
    pending.clear();
}
