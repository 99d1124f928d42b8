//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// The block grammar itself never fails: a rule that does not apply simply
/// declines and the text falls through. These errors belong to the format
/// layer around it (lookup, unsupported directions, JSON/HTML decoding).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
