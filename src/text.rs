use crate::node::{HtmlNode, LeafNode};

/// Formatting of an inline span. Only links and images carry a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// Inline span of text produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub kind: TextKind,
}

impl TextNode {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, TextKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, TextKind::Image { url: url.into() })
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }

    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            TextKind::Link { url } | TextKind::Image { url } => Some(url.as_str()),
            _ => None,
        }
    }

    /// Lower this span to the leaf element that displays it.
    pub fn to_html_node(&self) -> HtmlNode {
        let text = self.text.as_str();
        let leaf = match &self.kind {
            TextKind::Plain => LeafNode::raw(text),
            TextKind::Bold => LeafNode::new("b", text),
            TextKind::Italic => LeafNode::new("i", text),
            TextKind::Code => LeafNode::new("code", text),
            TextKind::Link { url } => LeafNode::new("a", text).with_prop("href", url.as_str()),
            TextKind::Image { url } => LeafNode::new("img", "")
                .with_prop("src", url.as_str())
                .with_prop("alt", text),
        };
        leaf.into()
    }
}
