//! Callout fence matcher: `:::type[title]\ncontent\n:::`

use super::normalize::CalloutType;
use super::BlockRule;
use crate::ir::tokens::{CalloutToken, Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Opening fence, optional bracketed title, then a non-greedy body up to the
/// first `\n:::`. The first closing fence wins, so callouts do not nest.
static CALLOUT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^:::([A-Za-z0-9_]+)(?:\[([^\]]*)\])?\n((?s:.*?))\n:::").unwrap()
});

pub(super) const RULE: BlockRule = BlockRule {
    name: "calloutBlock",
    kind: TokenKind::CalloutBlock,
    start,
    tokenize,
};

/// Index of the first `:::` marker.
pub fn start(src: &str) -> Option<usize> {
    src.find(":::")
}

pub fn tokenize(src: &str) -> Option<Token<'_>> {
    let caps = CALLOUT_PATTERN.captures(src)?;
    let raw = caps.get(0)?.as_str();
    let word = caps.get(1)?.as_str();

    let Some(callout_type) = CalloutType::from_word(word) else {
        debug!(word, "unrecognized callout type");
        return None;
    };

    Some(Token::CalloutBlock(CalloutToken {
        raw,
        callout_type,
        title: caps.get(2).map_or("", |m| m.as_str()),
        text: caps.get(3).map_or("", |m| m.as_str()).trim(),
    }))
}
