use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::text::{TextKind, TextNode};

/// Tokenize a span of markdown into typed text nodes.
///
/// Stages run in a fixed order and only ever rewrite nodes that are still
/// plain, so a span claimed by an earlier stage is left alone by later ones.
/// Emphasis does not nest.
pub fn text_to_inline_nodes(text: &str) -> Result<Vec<TextNode>> {
    let nodes = vec![TextNode::plain(text)];
    let nodes = split_delimiter(&nodes, "**", TextKind::Bold)?;
    let nodes = split_delimiter(&nodes, "_", TextKind::Italic)?;
    let nodes = split_delimiter(&nodes, "`", TextKind::Code)?;
    let nodes = split_images(&nodes);
    Ok(split_links(&nodes))
}

/// Split plain nodes on `delimiter`, alternating plain and `kind` spans.
///
/// Empty plain pieces (e.g. both ends of `**x**`) are kept.
pub fn split_delimiter(
    nodes: &[TextNode],
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextNode>> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node.clone());
            continue;
        }

        let parts: Vec<&str> = node.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::MalformedInline {
                delimiter: delimiter.to_string(),
                text: node.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 0 {
                out.push(TextNode::plain(part));
            } else {
                out.push(TextNode::new(part, kind.clone()));
            }
        }
    }

    Ok(out)
}

/// All `![alt](url)` occurrences as `(alt, url)` pairs.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_matches(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// All `[text](url)` occurrences that are not images, as `(text, url)` pairs.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    link_matches(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

pub fn split_images(nodes: &[TextNode]) -> Vec<TextNode> {
    split_matches(nodes, image_matches, |alt, url| TextNode::image(alt, url))
}

pub fn split_links(nodes: &[TextNode]) -> Vec<TextNode> {
    split_matches(nodes, link_matches, |text, url| TextNode::link(text, url))
}

struct InlineMatch {
    range: Range<usize>,
    text: String,
    url: String,
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
    })
}

// Images are matched too so their brackets are consumed and never re-read as links
fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
    })
}

fn image_matches(text: &str) -> Vec<InlineMatch> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            Some(InlineMatch {
                range: caps.get(0)?.range(),
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            })
        })
        .collect()
}

fn link_matches(text: &str) -> Vec<InlineMatch> {
    link_regex()
        .captures_iter(text)
        .filter(|caps| caps[1].is_empty())
        .filter_map(|caps| {
            Some(InlineMatch {
                range: caps.get(0)?.range(),
                text: caps[2].to_string(),
                url: caps[3].to_string(),
            })
        })
        .collect()
}

fn split_matches(
    nodes: &[TextNode],
    find: fn(&str) -> Vec<InlineMatch>,
    make: fn(String, String) -> TextNode,
) -> Vec<TextNode> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node.clone());
            continue;
        }

        let matches = find(&node.text);
        if matches.is_empty() {
            out.push(node.clone());
            continue;
        }

        let mut pos = 0;
        for m in matches {
            let before = &node.text[pos..m.range.start];
            if !before.is_empty() {
                out.push(TextNode::plain(before));
            }
            out.push(make(m.text, m.url));
            pos = m.range.end;
        }

        let rest = &node.text[pos..];
        if !rest.is_empty() {
            out.push(TextNode::plain(rest));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_code_delimiter() {
        let nodes = vec![TextNode::plain("This is text with a `code block` word")];
        assert_eq!(
            split_delimiter(&nodes, "`", TextKind::Code).unwrap(),
            vec![
                TextNode::plain("This is text with a "),
                TextNode::new("code block", TextKind::Code),
                TextNode::plain(" word"),
            ]
        );
    }

    #[test]
    fn split_across_several_nodes() {
        let nodes = vec![
            TextNode::plain("This is text with a `code block` word. And another `one` here."),
            TextNode::plain("And here is even a `second` node itself!"),
        ];
        let split = split_delimiter(&nodes, "`", TextKind::Code).unwrap();
        assert_eq!(split.len(), 8);
        assert_eq!(split[3], TextNode::new("one", TextKind::Code));
        assert_eq!(split[5], TextNode::plain("And here is even a "));
        assert_eq!(split[7], TextNode::plain(" node itself!"));
    }

    #[test]
    fn split_skips_non_plain_nodes() {
        let nodes = vec![TextNode::new("a `b` c", TextKind::Bold)];
        assert_eq!(split_delimiter(&nodes, "`", TextKind::Code).unwrap(), nodes);
    }

    #[test]
    fn split_keeps_empty_plain_edges() {
        let nodes = vec![TextNode::plain("**x**")];
        assert_eq!(
            split_delimiter(&nodes, "**", TextKind::Bold).unwrap(),
            vec![
                TextNode::plain(""),
                TextNode::new("x", TextKind::Bold),
                TextNode::plain(""),
            ]
        );
    }

    #[test]
    fn unterminated_delimiter_is_an_error() {
        let err = text_to_inline_nodes("a `code b").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedInline {
                delimiter: "`".to_string(),
                text: "a `code b".to_string(),
            }
        );
    }

    #[test]
    fn extract_markdown_images() {
        assert_eq!(
            extract_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)"),
            vec![("image".to_string(), "https://i.imgur.com/zjjcJKZ.png".to_string())]
        );
    }

    #[test]
    fn extract_markdown_links() {
        assert_eq!(
            extract_links("This is text with an [link to google](https://google.com)"),
            vec![("link to google".to_string(), "https://google.com".to_string())]
        );
    }

    #[test]
    fn links_ignore_images() {
        assert_eq!(
            extract_links("![x](u) and [y](v)"),
            vec![("y".to_string(), "v".to_string())]
        );
        assert!(extract_links("![only](image.png)").is_empty());
    }

    #[test]
    fn adjacent_links() {
        assert_eq!(
            extract_links("[a](1)[b](2)"),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn split_markdown_images() {
        let nodes = vec![TextNode::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_images(&nodes),
            vec![
                TextNode::plain("This is text with an "),
                TextNode::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextNode::plain(" and another "),
                TextNode::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_markdown_links() {
        let nodes = vec![TextNode::plain(
            "This is text with an [link1](https://i.imgur.com/zjjcJKZ.png) and another [link2](https://i.imgur.com/3elNhQu.png) done",
        )];
        assert_eq!(
            split_links(&nodes),
            vec![
                TextNode::plain("This is text with an "),
                TextNode::link("link1", "https://i.imgur.com/zjjcJKZ.png"),
                TextNode::plain(" and another "),
                TextNode::link("link2", "https://i.imgur.com/3elNhQu.png"),
                TextNode::plain(" done"),
            ]
        );
    }

    #[test]
    fn node_without_matches_is_unchanged() {
        let nodes = vec![TextNode::plain("nothing to see")];
        assert_eq!(split_links(&split_images(&nodes)), nodes);
    }

    #[test]
    fn full_pipeline() {
        let text = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            text_to_inline_nodes(text).unwrap(),
            vec![
                TextNode::plain("This is "),
                TextNode::new("text", TextKind::Bold),
                TextNode::plain(" with an "),
                TextNode::new("italic", TextKind::Italic),
                TextNode::plain(" word and a "),
                TextNode::new("code block", TextKind::Code),
                TextNode::plain(" and an "),
                TextNode::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextNode::plain(" and a "),
                TextNode::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn image_comes_before_link() {
        let nodes = text_to_inline_nodes("![x](u) and [y](v)").unwrap();
        assert_eq!(
            nodes,
            vec![
                TextNode::image("x", "u"),
                TextNode::plain(" and "),
                TextNode::link("y", "v"),
            ]
        );
    }

    #[test]
    fn bold_claims_span_before_code() {
        let nodes = text_to_inline_nodes("**a `b` c**").unwrap();
        assert_eq!(nodes[1], TextNode::new("a `b` c", TextKind::Bold));
    }
}
