//! Markdown document rendering to ratatui Lines.
//!
//! Each [`MarkdownNode`] maps to a fixed set of styled lines; nothing in the
//! document is interpreted beyond its node kind.

use ratatui::text::{Line, Span};
use safemark_engine::{Document, Inline, MarkdownNode};

use super::styles::MarkdownStyles;

/// Bullet prepended to list items.
const BULLET: &str = "• ";

/// Indent for code block lines.
const CODE_INDENT: &str = "  ";

/// Render a document to styled Lines, with one blank line between blocks.
pub fn render_document(doc: &Document, styles: &MarkdownStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, node) in doc.nodes.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        match node {
            MarkdownNode::Heading { content, .. } => {
                let spans = inline_spans(content, styles)
                    .into_iter()
                    .map(|span| {
                        let style = span.style.patch(styles.heading);
                        Span::styled(span.content, style)
                    })
                    .collect::<Vec<_>>();
                lines.push(Line::from(spans));
            }
            MarkdownNode::List { items } => {
                for item in items {
                    let mut spans = vec![Span::styled(BULLET, styles.list_marker)];
                    spans.extend(inline_spans(&item.content, styles));
                    lines.push(Line::from(spans));
                }
            }
            MarkdownNode::Paragraph { content } => {
                lines.push(Line::from(inline_spans(content, styles)));
            }
            MarkdownNode::CodeBlock { code, .. } => {
                if code.is_empty() {
                    lines.push(Line::from(Span::styled(CODE_INDENT, styles.code_block)));
                }
                for code_line in code.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("{CODE_INDENT}{code_line}"),
                        styles.code_block,
                    )));
                }
            }
            MarkdownNode::PlainText { text } => {
                for text_line in text.lines() {
                    lines.push(Line::from(Span::styled(text_line.to_string(), styles.plain)));
                }
            }
        }
    }

    lines
}

/// Convert inline nodes to spans.
fn inline_spans(content: &[Inline], styles: &MarkdownStyles) -> Vec<Span<'static>> {
    content
        .iter()
        .map(|segment| match segment {
            Inline::Text(t) => Span::styled(t.clone(), styles.text),
            Inline::Bold(t) => Span::styled(t.clone(), styles.text.patch(styles.strong)),
            Inline::Italic(t) => Span::styled(t.clone(), styles.text.patch(styles.emphasis)),
        })
        .collect()
}
