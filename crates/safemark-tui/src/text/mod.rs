//! Text rendering utilities.
//!
//! This module provides shared text rendering functionality:
//! - [`render_document`] - Convert a markdown [`Document`](safemark_engine::Document) to styled Lines
//! - [`MarkdownStyles`] - Style configuration for markdown elements
//! - [`wrap_lines`] - Width-aware wrapping that keeps span styles

mod markdown;
mod styles;
mod wrap;

pub use markdown::render_document;
pub use styles::MarkdownStyles;
pub use wrap::wrap_lines;
