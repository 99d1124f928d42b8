//! Fenced code blocks: opaque to the block rules.
//!
//! A fence opens on a line starting with up to three spaces and three or more
//! backticks or tildes. It closes on the first later line holding at least as
//! many of the same character and nothing else; an unclosed fence runs to the
//! end of the input.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {0,3}(`{3,}|~{3,})").unwrap());

/// Length of the fenced block at the start of `src`, closing line included.
pub fn fenced_block_len(src: &str) -> Option<usize> {
    let caps = FENCE_OPEN.captures(src)?;
    let fence = caps.get(1)?.as_str();
    let marker = fence.chars().next()?;

    let mut offset = line_end(src, 0);
    while offset < src.len() {
        let end = line_end(src, offset);
        if closes(&src[offset..end], marker, fence.len()) {
            return Some(end);
        }
        offset = end;
    }
    Some(src.len())
}

/// Offset of the first line start at or after `from` that opens a fence.
///
/// `from` must be greater than zero: offset zero is never reported.
pub fn next_fence_start(src: &str, from: usize) -> Option<usize> {
    src.match_indices('\n')
        .map(|(i, _)| i + 1)
        .filter(|&start| start >= from && start < src.len())
        .find(|&start| FENCE_OPEN.is_match(&src[start..]))
}

fn line_end(src: &str, from: usize) -> usize {
    src[from..].find('\n').map_or(src.len(), |i| from + i + 1)
}

fn closes(line: &str, marker: char, min_len: usize) -> bool {
    let body = line.trim_end();
    let trimmed = body.trim_start_matches(' ');
    body.len() - trimmed.len() <= 3
        && trimmed.len() >= min_len
        && trimmed.chars().all(|c| c == marker)
}
