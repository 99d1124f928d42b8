//! Core data structures for the wiki document tree.

use crate::grammar::normalize::CalloutType;
use serde::{Deserialize, Serialize};

/// An ordered sequence of block nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Document { nodes }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Insert a node before `index`. Indices past the end append.
    pub fn insert(&mut self, index: usize, node: Node) {
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node);
    }

    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index < self.nodes.len() {
            Some(self.nodes.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// A block in the document tree, tagged by its type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "attrs")]
pub enum Node {
    #[serde(rename = "calloutBlock")]
    Callout(Callout),
    #[serde(rename = "image")]
    Image(Image),
    #[serde(rename = "videoBlock")]
    Video(Video),
    /// Source text no block rule claimed, kept verbatim.
    #[serde(rename = "markdown")]
    Markdown(Markdown),
}

impl Node {
    /// The node's type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Callout(_) => "calloutBlock",
            Node::Image(_) => "image",
            Node::Video(_) => "videoBlock",
            Node::Markdown(_) => "markdown",
        }
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Node::Markdown(Markdown {
            source: source.into(),
        })
    }
}

/// Admonition block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Callout {
    #[serde(rename = "type", default)]
    pub callout_type: CalloutType,
    /// Empty means "use the type's default title".
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Callout {
    pub fn new(
        callout_type: CalloutType,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Callout {
            callout_type,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Title for presentation; never persisted.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            self.callout_type.default_title()
        } else {
            &self.title
        }
    }
}

/// Image with optional title and caption.
///
/// `title: None` and `title: Some("")` differ only in the model; both render
/// without a quoted title.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl Image {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Image {
            src: src.into(),
            alt: alt.into(),
            title: None,
            caption: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Video player block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl Video {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Video {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Verbatim Markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Markdown {
    #[serde(default)]
    pub source: String,
}
