/// Errors raised while turning markdown into HTML.
///
/// Every variant is a content defect: conversion of the current document
/// stops and nothing partial is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A delimiter occurred an odd number of times in a span of plain text.
    #[error("malformed emphasis: unterminated `{delimiter}` in {text:?}")]
    MalformedInline { delimiter: String, text: String },

    #[error("invalid heading: {0:?}")]
    InvalidHeading(String),

    /// A list line lacks the marker its position requires.
    #[error("invalid list item {index}: {line:?}")]
    InvalidListItem { index: usize, line: String },

    #[error("invalid node: {0}")]
    InvalidNode(String),

    #[error("missing title: no line starts with \"# \"")]
    MissingTitle,
}

pub type Result<T> = std::result::Result<T, Error>;
