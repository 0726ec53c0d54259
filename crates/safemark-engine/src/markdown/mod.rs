//! Safe markdown rendering.
//!
//! This module provides:
//! - [`render`] / [`render_with`] - never-failing entry points
//! - [`parse`] / [`parse_with`] - fallible parsing into a [`Document`]
//! - [`MarkdownInput`] - coercion boundary for non-string input
//! - [`Document::to_html`] - allow-list HTML serialization

mod ast;
mod html;
mod input;
mod parse;

pub use ast::{inline_text, Document, Inline, ListItem, MarkdownNode, HEADING_LEVEL};
pub use input::MarkdownInput;
pub use parse::{parse, parse_inline, parse_with, ParseError};

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::config::MarkdownConfig;

/// Render input with the default configuration.
pub fn render(input: impl Into<MarkdownInput>) -> Document {
    render_with(input, &MarkdownConfig::default())
}

/// Render input into a [`Document`], falling back to plain text on any failure.
///
/// Non-string input is coerced (see [`MarkdownInput::coerce`]) and rendered
/// as plain text without parsing. Parse errors and parser panics render the
/// whole input as a single plain-text node.
pub fn render_with(input: impl Into<MarkdownInput>, config: &MarkdownConfig) -> Document {
    let text = match input.into() {
        MarkdownInput::Text(text) => text,
        MarkdownInput::Other(value) => {
            let coerced = MarkdownInput::coerce(&value);
            debug!(input = %coerced, "non-string markdown input, rendering as plain text");
            return Document::plain(coerced);
        }
    };

    parse_or_plain(text, |text| parse_with(text, config))
}

/// Run `parse` over `text`, returning `text` as plain text if it errors or
/// panics.
///
/// A panic still reaches the installed panic hook (by default a message on
/// stderr) before the fallback document is returned.
fn parse_or_plain<F>(text: String, parse: F) -> Document
where
    F: FnOnce(&str) -> Result<Document, ParseError>,
{
    match catch_unwind(AssertUnwindSafe(|| parse(&text))) {
        Ok(Ok(doc)) => doc,
        Ok(Err(e)) => {
            warn!(error = %e, "markdown parse failed, rendering as plain text");
            Document::plain(text)
        }
        Err(_) => {
            warn!("markdown parser panicked, rendering as plain text");
            Document::plain(text)
        }
    }
}
