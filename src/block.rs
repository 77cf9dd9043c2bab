/// Structural kind of a block, derived from its text alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

const FENCE: &str = "```";

/// Split a document into blocks on blank lines, trimmed and non-empty.
pub fn segment(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. Anything that fails a structural check is a paragraph.
pub fn classify(block: &str) -> BlockType {
    if heading_level(block).is_some() {
        BlockType::Heading
    } else if block.starts_with("```\n") && block.ends_with(FENCE) {
        BlockType::Code
    } else if block.starts_with('>') {
        BlockType::Quote
    } else if block.starts_with("- ") {
        if block.lines().all(|line| line.starts_with("- ")) {
            BlockType::UnorderedList
        } else {
            BlockType::Paragraph
        }
    } else if block.starts_with("1. ") {
        let in_sequence = block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&ordered_marker(i)));
        if in_sequence {
            BlockType::OrderedList
        } else {
            BlockType::Paragraph
        }
    } else {
        BlockType::Paragraph
    }
}

/// Level of an ATX heading: 1-6 `#` followed by a space.
pub(crate) fn heading_level(block: &str) -> Option<usize> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&level) && block[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

/// Marker expected at the start of the `index`-th (0-based) ordered item.
pub(crate) fn ordered_marker(index: usize) -> String {
    format!("{}. ", index + 1)
}
