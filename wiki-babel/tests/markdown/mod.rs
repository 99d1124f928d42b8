//! Markdown format tests
//!
//! Tests for bidirectional Markdown ↔ document conversion.

mod export;
mod import;
mod roundtrip;
