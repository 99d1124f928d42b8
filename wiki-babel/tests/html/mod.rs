//! HTML format tests
//!
//! Display rendering of wiki documents and import of editor HTML.

mod export;
mod import;
