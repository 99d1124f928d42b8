//! Callout type vocabulary and its canonicalization.
//!
//! The Markdown fence accepts five words: `note`, `tip`, `caution`, `danger`
//! and `warning`. `warning` is an alias of `caution` and is folded at parse
//! time, so a stored callout only ever carries one of the four canonical
//! types. The same table drives the matcher, the renderers and the default
//! title lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every word the callout fence recognizes, aliases included.
pub const CALLOUT_TYPES: &[&str] = &["note", "tip", "caution", "danger", "warning"];

/// Canonical callout type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutType {
    #[default]
    Note,
    Tip,
    #[serde(alias = "warning")]
    Caution,
    Danger,
}

impl CalloutType {
    /// The four canonical types, in fence order.
    pub const ALL: [CalloutType; 4] = [
        CalloutType::Note,
        CalloutType::Tip,
        CalloutType::Caution,
        CalloutType::Danger,
    ];

    /// Resolve a raw fence word (case-insensitive), folding aliases.
    ///
    /// Returns `None` for words outside the recognized vocabulary.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "note" => Some(CalloutType::Note),
            "tip" => Some(CalloutType::Tip),
            "caution" | "warning" => Some(CalloutType::Caution),
            "danger" => Some(CalloutType::Danger),
            _ => None,
        }
    }

    /// The word written back into Markdown and HTML class names.
    pub fn as_str(self) -> &'static str {
        match self {
            CalloutType::Note => "note",
            CalloutType::Tip => "tip",
            CalloutType::Caution => "caution",
            CalloutType::Danger => "danger",
        }
    }

    /// Title shown when a callout has none of its own.
    pub fn default_title(self) -> &'static str {
        match self {
            CalloutType::Note => "Note",
            CalloutType::Tip => "Tip",
            CalloutType::Caution => "Caution",
            CalloutType::Danger => "Danger",
        }
    }
}

impl fmt::Display for CalloutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default title for a raw fence word, aliases included.
///
/// `warning` maps to "Caution", matching its canonical type.
pub fn default_title_for(word: &str) -> Option<&'static str> {
    CalloutType::from_word(word).map(CalloutType::default_title)
}
