//! Line-oriented parser for the supported markdown subset.
//!
//! Block rules, in precedence order:
//! - `# text` is a level-3 heading
//! - `- text` is a list item; consecutive items share one list
//! - a line of three backticks opens a fenced code block, closed by another
//! - any other non-empty line is a paragraph
//! - blank lines separate blocks and produce nothing
//!
//! Inline rules (outside code): `**bold**`, `*italic*`, everything else is text.

use crate::config::MarkdownConfig;

use super::ast::{Document, Inline, ListItem, MarkdownNode, HEADING_LEVEL};

const FENCE: &str = "```";

/// Reasons a document could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A code fence was opened but never closed.
    #[error("code fence opened on line {line} is never closed")]
    UnclosedFence { line: usize },

    /// The input exceeds the configured size limit.
    #[error("input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },
}

/// Parse markdown with the default configuration.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    parse_with(input, &MarkdownConfig::default())
}

/// Parse markdown into a [`Document`].
pub fn parse_with(input: &str, config: &MarkdownConfig) -> Result<Document, ParseError> {
    if input.len() > config.max_input_bytes {
        return Err(ParseError::InputTooLarge {
            len: input.len(),
            max: config.max_input_bytes,
        });
    }

    let mut nodes = Vec::new();
    let mut list: Vec<ListItem> = Vec::new();
    let mut lines = input.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        // Heading
        if let Some(text) = line.strip_prefix("# ") {
            flush_list(&mut list, &mut nodes);
            nodes.push(MarkdownNode::Heading {
                level: HEADING_LEVEL,
                content: parse_inline(text.trim()),
            });
            continue;
        }

        // List item
        if let Some(text) = line.strip_prefix("- ") {
            list.push(ListItem {
                content: parse_inline(text.trim()),
            });
            continue;
        }

        flush_list(&mut list, &mut nodes);

        // Blank line
        if line.trim().is_empty() {
            continue;
        }

        // Code fence start
        if let Some(language) = parse_fence_open(line) {
            let mut code_lines = Vec::new();
            let mut closed = false;
            for (_, code_line) in lines.by_ref() {
                if code_line.trim_end() == FENCE {
                    closed = true;
                    break;
                }
                code_lines.push(code_line);
            }
            if !closed {
                return Err(ParseError::UnclosedFence { line: index + 1 });
            }

            nodes.push(MarkdownNode::CodeBlock {
                language,
                code: code_lines.join("\n"),
            });
            continue;
        }

        // Regular paragraph
        nodes.push(MarkdownNode::Paragraph {
            content: parse_inline(line.trim()),
        });
    }

    flush_list(&mut list, &mut nodes);
    Ok(Document::new(nodes))
}

/// Move pending list items into a list node.
fn flush_list(list: &mut Vec<ListItem>, nodes: &mut Vec<MarkdownNode>) {
    if !list.is_empty() {
        nodes.push(MarkdownNode::List {
            items: std::mem::take(list),
        });
    }
}

/// Parse an opening fence, returning its optional language word.
///
/// Returns `None` if the line is not a fence opener.
fn parse_fence_open(line: &str) -> Option<Option<String>> {
    let rest = line.trim_end().strip_prefix(FENCE)?;
    if rest.is_empty() {
        return Some(None);
    }
    if rest.contains('`') || rest.contains(char::is_whitespace) {
        return None;
    }
    Some(Some(rest.to_string()))
}

/// Parse inline emphasis within a single line of text.
///
/// `**text**` becomes [`Inline::Bold`] and `*text*` becomes
/// [`Inline::Italic`]. The wrapped text must be non-empty and must not start
/// or end with whitespace, so `* a *` and `2 * 3 * 4` stay literal. Markers
/// without a closing partner are kept as text.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(pos) = rest.find('*') {
        plain.push_str(&rest[..pos]);
        let marker = &rest[pos..];

        // **bold**
        if let Some(inner) = marker.strip_prefix("**") {
            if let Some(end) = inner.find("**") {
                if is_flanked(&inner[..end]) {
                    push_text(&mut segments, &mut plain);
                    segments.push(Inline::Bold(inner[..end].to_string()));
                    rest = &inner[end + 2..];
                    continue;
                }
            }
        }

        // *italic*
        let inner = &marker[1..];
        if let Some(end) = inner.find('*') {
            if is_flanked(&inner[..end]) {
                push_text(&mut segments, &mut plain);
                segments.push(Inline::Italic(inner[..end].to_string()));
                rest = &inner[end + 1..];
                continue;
            }
        }

        // Unbalanced or empty marker stays literal
        plain.push('*');
        rest = inner;
    }

    plain.push_str(rest);
    push_text(&mut segments, &mut plain);
    segments
}

/// Emphasis content must be non-empty and not padded with whitespace.
fn is_flanked(inner: &str) -> bool {
    !inner.is_empty()
        && !inner.starts_with(char::is_whitespace)
        && !inner.ends_with(char::is_whitespace)
}

fn push_text(segments: &mut Vec<Inline>, plain: &mut String) {
    if !plain.is_empty() {
        segments.push(Inline::Text(std::mem::take(plain)));
    }
}
