use crate::error::{Error, Result};

/// Attribute list, rendered in insertion order
pub type Props = Vec<(String, String)>;

/// A node in the HTML tree produced from a markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

/// Inline element or raw text with no children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    /// `None` renders the value without a wrapping element.
    pub tag: Option<String>,
    pub value: Option<String>,
    pub props: Props,
}

/// Block-level container whose content is its children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub props: Props,
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn props(&self) -> &Props {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.props,
            HtmlNode::Parent(parent) => &parent.props,
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children.as_deref().unwrap_or_default(),
        }
    }

    /// Render this node and everything below it to an HTML string.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }
}

impl LeafNode {
    pub fn new(tag: &str, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    /// Untagged leaf that renders as its value verbatim.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    pub fn with_prop(mut self, name: &str, value: impl Into<String>) -> Self {
        self.props.push((name.to_string(), value.into()));
        self
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        let Some(value) = &self.value else {
            return Err(Error::InvalidNode("leaf node has no value".to_string()));
        };

        // Values are emitted as-is, no escaping
        match self.tag.as_deref() {
            None | Some("") => out.push_str(value),
            Some(tag) => {
                open_tag(tag, &self.props, out);
                out.push_str(value);
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            props: Props::new(),
        }
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        let tag = match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Err(Error::InvalidNode("parent node has no tag".to_string())),
        };
        let Some(children) = &self.children else {
            return Err(Error::InvalidNode(format!("<{tag}> has no children")));
        };

        open_tag(tag, &self.props, out);
        for child in children {
            child.write_html(out)?;
        }
        close_tag(tag, out);
        Ok(())
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

fn open_tag(tag: &str, props: &Props, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in props {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
