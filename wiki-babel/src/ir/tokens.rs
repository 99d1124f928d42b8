//! Transient tokens produced by the block grammar.
//!
//! A token borrows from the source it was matched against and lives only
//! until the mapper turns it into a [`Node`](crate::ir::nodes::Node).

use crate::grammar::normalize::CalloutType;
use serde::Serialize;

/// Tag identifying which rule produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    CalloutBlock,
    WikiImage,
    VideoBlock,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::CalloutBlock => "calloutBlock",
            TokenKind::WikiImage => "wikiImage",
            TokenKind::VideoBlock => "videoBlock",
        }
    }
}

/// A matched block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Token<'a> {
    CalloutBlock(CalloutToken<'a>),
    WikiImage(ImageToken<'a>),
    VideoBlock(VideoToken<'a>),
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::CalloutBlock(_) => TokenKind::CalloutBlock,
            Token::WikiImage(_) => TokenKind::WikiImage,
            Token::VideoBlock(_) => TokenKind::VideoBlock,
        }
    }

    /// The exact source span consumed, used to advance the scanner.
    pub fn raw(&self) -> &'a str {
        match self {
            Token::CalloutBlock(token) => token.raw,
            Token::WikiImage(token) => token.raw,
            Token::VideoBlock(token) => token.raw,
        }
    }
}

/// `:::type[title]\ncontent\n:::`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutToken<'a> {
    pub raw: &'a str,
    /// Already canonical: `warning` has been folded into `caution`.
    pub callout_type: CalloutType,
    pub title: &'a str,
    /// Body between the fences, trimmed.
    pub text: &'a str,
}

/// `![alt](href "title")` with an optional `\n*caption*` continuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageToken<'a> {
    pub raw: &'a str,
    /// Alt text.
    pub text: &'a str,
    pub href: &'a str,
    pub title: Option<&'a str>,
    pub caption: Option<&'a str>,
}

/// `![alt](src)` where `src` carries a video extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoToken<'a> {
    pub raw: &'a str,
    pub alt: &'a str,
    pub src: &'a str,
}
