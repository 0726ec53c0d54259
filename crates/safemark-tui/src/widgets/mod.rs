//! Widgets for safemark.
//!
//! - [`TextPreviewToggle`] - Collapsible text with a show more / show less control
//! - [`MarkdownView`] - Scrollable rendered markdown document

mod markdown_view;
mod text_preview;

pub use markdown_view::MarkdownView;
pub use text_preview::TextPreviewToggle;
