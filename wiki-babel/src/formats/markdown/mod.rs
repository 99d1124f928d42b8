//! Markdown format implementation
//!
//! Bidirectional conversion between the wiki's Markdown dialect and the
//! document tree. Only the custom blocks are modeled; everything else is
//! carried through untouched as markdown nodes.
//!
//! # Element Mapping Table
//!
//! | Node          | Markdown                                   | Import Notes                              |
//! |---------------|--------------------------------------------|-------------------------------------------|
//! | calloutBlock  | `:::type[title]\ncontent\n:::`             | `warning` → `caution`; unknown types fall through |
//! | videoBlock    | `![alt](clip.mp4)`                         | Video extensions only, tried before images |
//! | image         | `![alt](src "title")` + `\n*caption*`      | Caption must be on the very next line     |
//! | markdown      | Anything else, verbatim                    | Whitespace-only gaps are dropped          |
//!
//! # Lossy Conversions
//!
//! - `:::warning` is re-emitted as `:::caution`
//! - Callout bodies are trimmed
//! - A quoted title on a video URL makes it an image (videos have no title)
//! - `\r\n` line endings become `\n`
//! - Blank-line gaps between blocks are canonicalized

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with callout, video and captioned image blocks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_markdown(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc)
    }
}
