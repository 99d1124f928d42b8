//! Helpers shared across formats.

pub mod links;
