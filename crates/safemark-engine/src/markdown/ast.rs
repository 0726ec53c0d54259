//! Markdown document tree.
//!
//! The node set is closed: every block and inline kind the renderer can
//! produce is listed here, and none of them carries raw markup. Text that
//! looks like a tag is stored as ordinary text.

use serde::{Deserialize, Serialize};

/// Level used for every `# ` heading.
pub const HEADING_LEVEL: u8 = 3;

/// Inline content inside headings, list items and paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// `**strong**` text.
    Bold(String),
    /// `*emphasised*` text.
    Italic(String),
}

impl Inline {
    /// The text carried by this node, without markers.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(t) | Self::Bold(t) | Self::Italic(t) => t,
        }
    }
}

/// A single item inside a [`MarkdownNode::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Inline content of the item.
    pub content: Vec<Inline>,
}

/// A block-level node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkdownNode {
    /// `# Title` line.
    Heading { level: u8, content: Vec<Inline> },
    /// Consecutive `- item` lines.
    List { items: Vec<ListItem> },
    /// Any other non-empty line.
    Paragraph { content: Vec<Inline> },
    /// Fenced code block; `code` is kept literally.
    CodeBlock { language: Option<String>, code: String },
    /// Unparsed input shown as-is, used when parsing is abandoned.
    PlainText { text: String },
}

/// A parsed document: an ordered list of block nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<MarkdownNode>,
}

impl Document {
    /// Create a document from parsed nodes.
    pub fn new(nodes: Vec<MarkdownNode>) -> Self {
        Self { nodes }
    }

    /// A document holding `text` verbatim as a single plain-text node.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            nodes: vec![MarkdownNode::PlainText { text: text.into() }],
        }
    }

    /// Whether the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether this document is a plain-text fallback.
    pub fn is_plain(&self) -> bool {
        matches!(self.nodes.as_slice(), [MarkdownNode::PlainText { .. }])
    }

    /// Headings as `(level, text)` pairs.
    pub fn headings(&self) -> Vec<(u8, String)> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                MarkdownNode::Heading { level, content } => Some((*level, inline_text(content))),
                _ => None,
            })
            .collect()
    }

    /// Text of every list item, in document order.
    pub fn list_items(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                MarkdownNode::List { items } => Some(items),
                _ => None,
            })
            .flatten()
            .map(|item| inline_text(&item.content))
            .collect()
    }

    /// Contents of every code block.
    pub fn code_blocks(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                MarkdownNode::CodeBlock { code, .. } => Some(code.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Readable text of the document, one block per line.
    pub fn plain_text(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        for node in &self.nodes {
            match node {
                MarkdownNode::Heading { content, .. } | MarkdownNode::Paragraph { content } => {
                    out.push(inline_text(content));
                }
                MarkdownNode::List { items } => {
                    out.extend(items.iter().map(|item| inline_text(&item.content)));
                }
                MarkdownNode::CodeBlock { code, .. } => out.push(code.clone()),
                MarkdownNode::PlainText { text } => out.push(text.clone()),
            }
        }
        out.join("\n")
    }
}

/// Concatenate the text of inline nodes.
pub fn inline_text(content: &[Inline]) -> String {
    content.iter().map(Inline::text).collect()
}
