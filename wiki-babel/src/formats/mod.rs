//! Format implementations
//!
//! This module contains all format implementations that convert between
//! wiki documents and their text representations.

pub mod html;
pub mod icons;
pub mod json;
pub mod markdown;

pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
