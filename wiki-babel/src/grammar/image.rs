//! Image matcher with the caption-on-next-line convention:
//!
//! ```text
//! ![alt](src "title")
//! *caption*
//! ```

use super::BlockRule;
use crate::ir::tokens::{ImageToken, Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^!\[([^\]]*)\]\(([^)"]+)(?:\s+"([^"]*)")?\)"#).unwrap());

/// A caption must follow on the very next line; a blank line breaks it off.
static CAPTION_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n\*([^*]+)\*").unwrap());

pub(super) const RULE: BlockRule = BlockRule {
    name: "wikiImage",
    kind: TokenKind::WikiImage,
    start,
    tokenize,
};

pub fn start(src: &str) -> Option<usize> {
    src.find("![")
}

pub fn tokenize(src: &str) -> Option<Token<'_>> {
    let caps = IMAGE_PATTERN.captures(src)?;
    let image_len = caps.get(0)?.end();

    let (caption, caption_len) = match CAPTION_PATTERN.captures(&src[image_len..]) {
        Some(caption) => (caption.get(1).map(|m| m.as_str()), caption.get(0)?.end()),
        None => (None, 0),
    };

    Some(Token::WikiImage(ImageToken {
        raw: &src[..image_len + caption_len],
        text: caps.get(1).map_or("", |m| m.as_str()),
        href: caps.get(2)?.as_str(),
        title: caps.get(3).map(|m| m.as_str()),
        caption,
    }))
}
