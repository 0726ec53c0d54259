//! Scrollable markdown document widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};
use safemark_engine::Document;

use crate::text::{render_document, wrap_lines, MarkdownStyles};
use crate::theme::Theme;

/// Widget that renders a parsed [`Document`].
pub struct MarkdownView<'a> {
    /// The document to render.
    document: &'a Document,
    /// Theme for styling.
    theme: &'a Theme,
    /// Scroll offset (lines from top).
    scroll: u16,
}

impl<'a> MarkdownView<'a> {
    /// Create a new markdown view.
    pub fn new(document: &'a Document, theme: &'a Theme) -> Self {
        Self {
            document,
            theme,
            scroll: 0,
        }
    }

    /// Set the scroll offset.
    #[must_use]
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Lines after wrapping to `width` columns.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let styles = MarkdownStyles::from_theme(self.theme);
        wrap_lines(render_document(self.document, &styles), usize::from(width))
    }

    /// Largest useful scroll offset for an area of the given size.
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let total = u16::try_from(self.lines(area.width).len()).unwrap_or(u16::MAX);
        total.saturating_sub(area.height)
    }
}

impl Widget for MarkdownView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
