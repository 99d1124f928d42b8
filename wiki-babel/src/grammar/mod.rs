//! Block grammar for the wiki's custom Markdown constructs.
//!
//! Each rule pairs a start hook (where could this construct begin in the
//! remaining input?) with an anchored tokenizer (does it begin right here?).
//! Rules are tried in table order and the first token wins; a rule that does
//! not apply declines with `None` and never aborts the scan.
//!
//! Order matters for disambiguation:
//!
//! 1. calloutBlock - `:::type[title]` fences
//! 2. videoBlock   - image syntax with a video extension, tried before images
//! 3. wikiImage    - any image, with an optional caption line
//!
//! Swapping 2 and 3 would make every video URL parse as a plain image.

pub mod callout;
pub mod fence;
pub mod image;
pub mod normalize;
pub mod video;

use crate::ir::tokens::{Token, TokenKind};
use tracing::{debug, trace};

/// A block rule: start hook plus anchored tokenizer.
#[derive(Clone, Copy)]
pub struct BlockRule {
    pub name: &'static str,
    pub kind: TokenKind,
    /// Offset of the first position where this rule might match.
    pub start: fn(&str) -> Option<usize>,
    /// Match at the beginning of the input, consuming exactly the token span.
    pub tokenize: fn(&str) -> Option<Token<'_>>,
}

/// Rules in priority order.
pub const BLOCK_RULES: &[BlockRule] = &[callout::RULE, video::RULE, image::RULE];

/// Try every rule at the start of `src`.
pub fn tokenize_block(src: &str) -> Option<Token<'_>> {
    for rule in BLOCK_RULES {
        if let Some(token) = (rule.tokenize)(src) {
            debug!(rule = rule.name, len = token.raw().len(), "block matched");
            return Some(token);
        }
    }
    None
}

/// Earliest offset at which any rule might match.
pub fn next_start(src: &str) -> Option<usize> {
    BLOCK_RULES.iter().filter_map(|rule| (rule.start)(src)).min()
}

/// A piece of scanned input.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    Token(Token<'a>),
    /// Input no rule claimed.
    Text(&'a str),
}

/// Single left-to-right pass over the input.
///
/// A fenced code block starting at the cursor is emitted whole as
/// [`Segment::Text`]; rules never look inside it. Otherwise every rule is
/// tried; when all decline, the text up to the next start candidate or fence
/// (at least one character) is emitted as text and the cursor moves past it.
/// Adjacent text segments may be emitted; callers merge them.
pub struct Scanner<'a> {
    src: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Scanner { src, cursor: 0 }
    }

    fn at_line_start(&self) -> bool {
        self.cursor == 0 || self.src[..self.cursor].ends_with('\n')
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.src[self.cursor..];
        let first = rest.chars().next()?;

        if self.at_line_start() {
            if let Some(len) = fence::fenced_block_len(rest) {
                trace!(from = self.cursor, to = self.cursor + len, "fenced code");
                self.cursor += len;
                return Some(Segment::Text(&rest[..len]));
            }
        }

        if let Some(token) = tokenize_block(rest) {
            self.cursor += token.raw().len();
            return Some(Segment::Token(token));
        }

        let skip = first.len_utf8();
        let rule_start = next_start(&rest[skip..]).map(|offset| skip + offset);
        let fence_start = fence::next_fence_start(rest, skip);
        let end = match (rule_start, fence_start) {
            (Some(a), Some(b)) => a.min(b),
            (a, b) => a.or(b).unwrap_or(rest.len()),
        };
        trace!(from = self.cursor, to = self.cursor + end, "fallthrough text");
        self.cursor += end;
        Some(Segment::Text(&rest[..end]))
    }
}

/// Scan `src` into segments.
pub fn scan(src: &str) -> Scanner<'_> {
    Scanner::new(src)
}
