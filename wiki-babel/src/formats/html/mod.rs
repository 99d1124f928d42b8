//! HTML format implementation
//!
//! Bidirectional conversion between wiki documents and the display HTML the
//! editor renders.
//!
//! # Library Choice
//!
//! - `comrak`: renders markdown nodes and callout bodies
//! - `html5ever` + `markup5ever_rcdom`: browser-grade HTML5 parsing for import
//!
//! # Element Mapping Table
//!
//! | Node     | HTML                                                              | Import from                                   |
//! |----------|-------------------------------------------------------------------|-----------------------------------------------|
//! | Callout  | `<aside class="callout callout-T" data-type="callout-block">`      | `aside.callout`, `div[data-type=callout-block]` |
//! | Video    | `<div data-type="video-block" data-src data-alt><video>`          | `div[data-type=video-block]`, `<video>`       |
//! | Image    | `<p><img src alt title><em>caption</em></p>`                      | `img[src]` + following `<em>` or `caption`    |
//! | Markdown | comrak output                                                     | text of any other block element               |
//!
//! # Options
//!
//! - `standalone`: wrap the body in a full HTML document with `css/baseline.css`
//! - `icons`: emit the inline SVG icon in callout titles (default on)
//!
//! # Lossy Conversions
//!
//! - Callout content is imported as plain text; inline formatting is lost
//! - Markdown constructs beyond emphasis, code, links, headings and list items
//!   are flattened to their text

mod parser;
mod serializer;

pub use parser::parse_from_html;
pub use serializer::{render_markdown_html, serialize_to_html, HtmlOptions};

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use std::collections::HashMap;

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Display HTML with callout, image and video blocks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parse_from_html(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_to_html(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            return self.serialize(doc);
        }
        // Per-call options override only the keys they name.
        let mut merged = self.options.clone();
        let requested = HtmlOptions::from_params(options)?;
        if options.contains_key("standalone") {
            merged.standalone = requested.standalone;
        }
        if options.contains_key("icons") {
            merged.icons = requested.icons;
        }
        serialize_to_html(doc, &merged)
    }
}
