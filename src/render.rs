use crate::block::{BlockType, heading_level, ordered_marker};
use crate::error::{Error, Result};
use crate::inline::text_to_inline_nodes;
use crate::node::{HtmlNode, ParentNode};
use crate::text::{TextKind, TextNode};

/// Build the HTML container for one classified block.
///
/// Structure is re-checked here, so a block handed in with the wrong kind is
/// rejected rather than rendered half-stripped.
pub fn block_to_html_node(block: &str, kind: BlockType) -> Result<ParentNode> {
    match kind {
        BlockType::Paragraph => paragraph(block),
        BlockType::Heading => heading(block),
        BlockType::Code => code(block),
        BlockType::Quote => quote(block),
        BlockType::UnorderedList => unordered_list(block),
        BlockType::OrderedList => ordered_list(block),
    }
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_inline_nodes(text)?
        .iter()
        .map(TextNode::to_html_node)
        .collect())
}

fn paragraph(block: &str) -> Result<ParentNode> {
    let text = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(ParentNode::new("p", inline_children(&text)?))
}

fn heading(block: &str) -> Result<ParentNode> {
    let Some(level) = heading_level(block) else {
        return Err(Error::InvalidHeading(block.to_string()));
    };

    let text = &block[level + 1..];
    if text.trim().is_empty() {
        return Err(Error::InvalidHeading(block.to_string()));
    }

    Ok(ParentNode::new(&format!("h{level}"), inline_children(text)?))
}

fn code(block: &str) -> Result<ParentNode> {
    // Drop the fence lines, keep everything between them verbatim
    let lines: Vec<&str> = block.lines().collect();
    let body = lines
        .get(1..lines.len().saturating_sub(1))
        .unwrap_or_default();

    let mut content = body.join("\n");
    content.push('\n');

    let code = TextNode::new(content, TextKind::Code).to_html_node();
    Ok(ParentNode::new("pre", vec![code]))
}

fn quote(block: &str) -> Result<ParentNode> {
    let text = block
        .lines()
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(ParentNode::new("blockquote", inline_children(&text)?))
}

fn unordered_list(block: &str) -> Result<ParentNode> {
    let items = block
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let item = line
                .strip_prefix("- ")
                .ok_or_else(|| invalid_item(index, line))?;
            list_item(item.trim())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ParentNode::new("ul", items))
}

fn ordered_list(block: &str) -> Result<ParentNode> {
    let items = block
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let item = line
                .strip_prefix(ordered_marker(index).as_str())
                .ok_or_else(|| invalid_item(index, line))?;
            list_item(item)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ParentNode::new("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(ParentNode::new("li", inline_children(text)?).into())
}

fn invalid_item(index: usize, line: &str) -> Error {
    Error::InvalidListItem {
        index,
        line: line.to_string(),
    }
}
