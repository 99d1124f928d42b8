//! Link helpers shared by the importers and the editor surface.
//!
//! Two rules apply everywhere a link target enters a document:
//! - an href containing `javascript:` (any case) is never kept
//! - pasted text becomes a link only when it is a single http(s) URL

use once_cell::sync::Lazy;
use regex::Regex;

static PASTE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://\S+$").unwrap());

/// Whether an href may be stored as a link or media source.
pub fn is_safe_href(href: &str) -> bool {
    !href.to_ascii_lowercase().contains("javascript:")
}

/// Returns the URL when pasted text should become a link.
///
/// The text is trimmed first; anything other than a lone http(s) URL yields
/// `None`, including URLs that fail [`is_safe_href`].
pub fn paste_link_target(text: &str) -> Option<&str> {
    let text = text.trim();
    if PASTE_URL.is_match(text) && is_safe_href(text) {
        Some(text)
    } else {
        None
    }
}
