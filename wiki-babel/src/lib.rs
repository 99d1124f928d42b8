//! Format conversion for wiki pages
//!
//!     This crate converts between the wiki's Markdown source and the typed document the editor
//!     works with, and renders that document for display.
//!
//!     TLDR: For format authors:
//!         - Plain Markdown is never parsed here; it is carried verbatim in markdown nodes and
//!           handed to comrak when it has to be displayed.
//!         - Only the wiki's own block syntaxes (callouts, videos, captioned images) are
//!           recognized, by the rules in ./grammar.
//!         - Each format lives under ./formats/<format> and implements the Format trait.
//!
//! Architecture
//!
//!     Markdown source ──grammar──▶ tokens ──ir::from_tokens──▶ Document ──formats──▶ text
//!
//!     The grammar is an ordered table of block rules (callout, video, image). Video is tried
//!     before image because every video reference is also a syntactically valid image. A scanner
//!     walks the source, emitting tokens for matched blocks and plain text for everything else.
//!
//!     This is a pure lib: no code here supposes a shell environment, be it std print or env vars.
//!
//!     The file structure :
//!     .
//!     ├── commands.rs             # Slash command catalog
//!     ├── common                  # Link helpers shared by formats
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── grammar                 # Block rules and the scanner
//!     ├── ir                      # Tokens, document nodes and the token → node mappers
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── <format>
//!         │   ├── parser.rs
//!         │   ├── serializer.rs
//!         │   └── mod.rs
//!         └── icons.rs            # Callout icons for display
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── mod.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes them.
//!
//! Formats
//!
//!     - markdown: the wiki's storage format, parse and serialize
//!     - html: display rendering, plus import of editor HTML
//!     - json: the node tree, for tooling
//!
pub mod commands;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod grammar;
pub mod ir;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use ir::nodes::{Callout, Document, Image, Node, Video};
pub use registry::FormatRegistry;

/// Parse wiki Markdown into a document.
///
/// Parsing never fails: text that matches no block rule is kept verbatim.
pub fn parse_markdown(source: &str) -> Document {
    formats::markdown::parser::parse_document(source)
}

/// Serialize a document back to wiki Markdown.
pub fn to_markdown(doc: &Document) -> String {
    formats::markdown::serializer::render_document(doc)
}
