//! Token → node mappers.

use crate::ir::nodes::{Callout, Image, Node, Video};
use crate::ir::tokens::{CalloutToken, ImageToken, Token, VideoToken};

/// Build the document node for a matched token.
pub fn token_to_node(token: &Token<'_>) -> Node {
    match token {
        Token::CalloutBlock(token) => Node::Callout(callout_from_token(token)),
        Token::WikiImage(token) => Node::Image(image_from_token(token)),
        Token::VideoBlock(token) => Node::Video(video_from_token(token)),
    }
}

pub fn callout_from_token(token: &CalloutToken<'_>) -> Callout {
    Callout {
        callout_type: token.callout_type,
        title: token.title.to_string(),
        content: token.text.to_string(),
    }
}

/// Empty title or caption groups map to `None`.
pub fn image_from_token(token: &ImageToken<'_>) -> Image {
    Image {
        src: token.href.to_string(),
        alt: token.text.to_string(),
        title: non_empty(token.title),
        caption: non_empty(token.caption),
    }
}

pub fn video_from_token(token: &VideoToken<'_>) -> Video {
    Video {
        src: token.src.to_string(),
        alt: token.alt.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
