//! safemark-engine: Headless core for safe text presentation
//!
//! This crate provides the logic behind safemark's two components:
//! - Collapsible text previews with a "show more" / "show less" control
//! - A restricted markdown renderer that never emits live markup
//! - Configuration loading and validation

pub mod config;
pub mod markdown;
pub mod preview;

// Re-export commonly used types
pub use config::{Config, ConfigError, MarkdownConfig, PreviewConfig};
pub use markdown::{
    parse, parse_inline, render, render_with, Document, Inline, ListItem, MarkdownInput,
    MarkdownNode, ParseError,
};
pub use preview::{PreviewState, TextPreview};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
