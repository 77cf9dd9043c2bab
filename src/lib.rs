mod block;
mod config;
mod error;
mod inline;
mod node;
mod render;
pub mod site;
mod text;

pub use block::{BlockType, classify, segment};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use inline::{
    extract_images, extract_links, split_delimiter, split_images, split_links,
    text_to_inline_nodes,
};
pub use node::{HtmlNode, LeafNode, ParentNode, Props};
pub use render::block_to_html_node;
pub use text::{TextKind, TextNode};

/// Parse a markdown document into a `div` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let children = segment(markdown)
        .into_iter()
        .map(|block| block_to_html_node(block, classify(block)).map(HtmlNode::from))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParentNode::new("div", children).into())
}

/// Convert a markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.render()
}

/// Text of the first `# ` (level one) heading line.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}
