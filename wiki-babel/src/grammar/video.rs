//! Video matcher: image syntax whose URL ends in a video extension.

use super::BlockRule;
use crate::ir::tokens::{Token, TokenKind, VideoToken};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Extensions rendered as a video player.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".webm", ".ogg", ".mov", ".avi", ".mkv", ".m4v",
];

/// No quoted title form: `![alt](url)` only.
static VIDEO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)").unwrap());

pub(super) const RULE: BlockRule = BlockRule {
    name: "videoBlock",
    kind: TokenKind::VideoBlock,
    start,
    tokenize,
};

/// Case-insensitive extension check.
pub fn is_video_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let lower = url.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Index of the first `![`, shared with the image rule.
pub fn start(src: &str) -> Option<usize> {
    src.find("![")
}

pub fn tokenize(src: &str) -> Option<Token<'_>> {
    let caps = VIDEO_PATTERN.captures(src)?;
    let url = caps.get(2)?.as_str();

    if !is_video_url(url) {
        debug!(url, "not a video url");
        return None;
    }

    Some(Token::VideoBlock(VideoToken {
        raw: caps.get(0)?.as_str(),
        alt: caps.get(1).map_or("", |m| m.as_str()),
        src: url,
    }))
}
