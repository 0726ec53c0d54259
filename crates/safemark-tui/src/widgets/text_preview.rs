//! Collapsible text preview widget.
//!
//! Renders the visible lines of a [`TextPreview`] followed, when the text is
//! longer than its limit, by a control line labelled "show more" or
//! "show less". Lines are wrapped to the area width, and the whole view
//! (control included) scrolls as one.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use safemark_engine::TextPreview;

use crate::text::{wrap_lines, MarkdownStyles};
use crate::theme::Theme;

/// Stateful widget over a [`TextPreview`].
pub struct TextPreviewToggle<'a> {
    theme: &'a Theme,
    /// Scroll offset (rows from top).
    scroll: u16,
}

impl<'a> TextPreviewToggle<'a> {
    /// Create a new preview widget.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme, scroll: 0 }
    }

    /// Set the scroll offset.
    #[must_use]
    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Text shown for the control, e.g. `[show more]`.
    pub fn control_text(preview: &TextPreview) -> Option<String> {
        preview.control_label().map(|label| format!("[{label}]"))
    }

    /// Row of `area` holding the control at the given scroll offset, if it
    /// is on screen.
    pub fn control_row(preview: &TextPreview, area: Rect, scroll: u16) -> Option<u16> {
        preview.control_label()?;
        let offset = u16::try_from(text_rows(preview, area.width))
            .ok()?
            .checked_sub(scroll)?;
        (offset < area.height).then(|| area.y + offset)
    }

    /// Largest useful scroll offset for an area of the given size.
    pub fn max_scroll(preview: &TextPreview, area: Rect) -> u16 {
        let rows = text_rows(preview, area.width) + usize::from(preview.has_control());
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_sub(area.height)
    }

    /// Wrapped lines for `width` columns, control last.
    pub fn lines(&self, preview: &TextPreview, width: u16) -> Vec<Line<'static>> {
        let styles = MarkdownStyles::from_theme(self.theme);
        let mut lines = text_lines(preview, styles.text);
        if let Some(control) = Self::control_text(preview) {
            lines.push(Line::from(Span::styled(control, styles.control)));
        }
        wrap_lines(lines, usize::from(width))
    }
}

fn text_lines(preview: &TextPreview, style: Style) -> Vec<Line<'static>> {
    preview
        .visible_lines()
        .into_iter()
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

/// Rows taken by the visible text once wrapped to `width`.
fn text_rows(preview: &TextPreview, width: u16) -> usize {
    wrap_lines(text_lines(preview, Style::default()), usize::from(width)).len()
}

impl StatefulWidget for TextPreviewToggle<'_> {
    type State = TextPreview;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Paragraph::new(self.lines(state, area.width))
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
