//! Interactive viewer state.
//!
//! A [`ViewerApp`] shows either a rendered markdown document (scrollable) or
//! a collapsible text preview (toggled with Enter/Space or a click on the
//! control line).

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use safemark_engine::{Document, TextPreview};

use crate::event::Action;
use crate::theme::Theme;
use crate::widgets::{MarkdownView, TextPreviewToggle};

/// What the viewer is showing.
#[derive(Debug, Clone)]
pub enum ViewerMode {
    /// Rendered markdown with a scroll offset.
    Markdown { document: Document, scroll: u16 },
    /// Collapsible plain text with a scroll offset.
    Preview { preview: TextPreview, scroll: u16 },
}

impl ViewerMode {
    fn scroll_mut(&mut self) -> &mut u16 {
        match self {
            Self::Markdown { scroll, .. } | Self::Preview { scroll, .. } => scroll,
        }
    }
}

/// Viewer application state.
#[derive(Debug)]
pub struct ViewerApp {
    /// Current content.
    pub mode: ViewerMode,
    /// Title shown on the border.
    pub title: String,
    /// Theme colors.
    pub theme: Theme,
    /// Content area from the last render, used to map clicks.
    pub content_area: Rect,
    /// Should the app quit?
    pub should_quit: bool,
}

impl ViewerApp {
    /// Viewer for a rendered markdown document.
    pub fn markdown(title: impl Into<String>, document: Document) -> Self {
        Self::new(title, ViewerMode::Markdown { document, scroll: 0 })
    }

    /// Viewer for a collapsible text preview.
    pub fn preview(title: impl Into<String>, preview: TextPreview) -> Self {
        Self::new(title, ViewerMode::Preview { preview, scroll: 0 })
    }

    fn new(title: impl Into<String>, mode: ViewerMode) -> Self {
        Self {
            mode,
            title: title.into(),
            theme: Theme::from_env(),
            content_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Apply a user action.
    pub fn handle_action(&mut self, action: Action) {
        let page = self.content_area.height.max(1);
        match action {
            Action::Quit => self.should_quit = true,
            Action::Toggle => {
                if let ViewerMode::Preview { preview, .. } = &mut self.mode {
                    preview.activate_control();
                }
            }
            Action::Click(row) => {
                if let ViewerMode::Preview { preview, scroll } = &mut self.mode {
                    if TextPreviewToggle::control_row(preview, self.content_area, *scroll)
                        == Some(row)
                    {
                        preview.activate_control();
                    }
                }
            }
            Action::Up => {
                let scroll = self.mode.scroll_mut();
                *scroll = scroll.saturating_sub(1);
            }
            Action::Down => {
                let scroll = self.mode.scroll_mut();
                *scroll = scroll.saturating_add(1);
            }
            Action::PageUp => {
                let scroll = self.mode.scroll_mut();
                *scroll = scroll.saturating_sub(page);
            }
            Action::PageDown => {
                let scroll = self.mode.scroll_mut();
                *scroll = scroll.saturating_add(page);
            }
            Action::Top => *self.mode.scroll_mut() = 0,
            Action::Bottom => *self.mode.scroll_mut() = u16::MAX,
            Action::None => {}
        }
    }

    /// Footer hint for the current mode.
    fn hint(&self) -> &'static str {
        match self.mode {
            ViewerMode::Markdown { .. } => "j/k scroll · g/G top/bottom · q quit",
            ViewerMode::Preview { .. } => "enter toggle · j/k scroll · q quit",
        }
    }

    /// Render the viewer, recording the content area for click mapping.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let [main, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.theme.primary),
            ))
            .style(Style::default().bg(self.theme.base));
        let inner = block.inner(main);
        block.render(main, buf);
        self.content_area = inner;

        match &mut self.mode {
            ViewerMode::Markdown { document, scroll } => {
                let view = MarkdownView::new(document, &self.theme);
                *scroll = (*scroll).min(view.max_scroll(inner));
                view.scroll(*scroll).render(inner, buf);
            }
            ViewerMode::Preview { preview, scroll } => {
                *scroll = (*scroll).min(TextPreviewToggle::max_scroll(preview, inner));
                TextPreviewToggle::new(&self.theme)
                    .scroll(*scroll)
                    .render(inner, buf, preview);
            }
        }

        Paragraph::new(Line::from(Span::styled(
            self.hint(),
            Style::default().fg(self.theme.muted),
        )))
        .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use safemark_engine::{render, PreviewState};

    fn draw(app: &mut ViewerApp, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    fn preview_state(app: &ViewerApp) -> PreviewState {
        match &app.mode {
            ViewerMode::Preview { preview, .. } => preview.state(),
            ViewerMode::Markdown { .. } => panic!("not a preview"),
        }
    }

    #[test]
    fn test_quit() {
        let mut app = ViewerApp::markdown("doc", render("hi"));
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_preview() {
        let preview = TextPreview::new("a\nb\nc", 1).unwrap();
        let mut app = ViewerApp::preview("notes", preview);

        let out = draw(&mut app, 30, 8);
        assert!(out.contains("[show more]"));
        assert!(!out.contains("│c"));

        app.handle_action(Action::Toggle);
        assert_eq!(preview_state(&app), PreviewState::Expanded);
        let out = draw(&mut app, 30, 8);
        assert!(out.contains("[show less]"));
        assert!(out.contains("│c"));
    }

    #[test]
    fn test_click_on_control_toggles() {
        let preview = TextPreview::new("a\nb\nc", 1).unwrap();
        let mut app = ViewerApp::preview("notes", preview);
        draw(&mut app, 30, 8);

        // border row 0, "a" on row 1, control on row 2
        app.handle_action(Action::Click(1));
        assert_eq!(preview_state(&app), PreviewState::Collapsed);
        app.handle_action(Action::Click(2));
        assert_eq!(preview_state(&app), PreviewState::Expanded);
    }

    #[test]
    fn test_click_on_control_after_scrolling_collapses() {
        let text = (1..=10).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
        let mut app = ViewerApp::preview("notes", TextPreview::new(text, 2).unwrap());
        app.handle_action(Action::Toggle);

        // 5 content rows inside the border, 11 rows of text plus control
        let out = draw(&mut app, 20, 8);
        assert!(!out.contains("[show less]"));

        app.handle_action(Action::Bottom);
        let out = draw(&mut app, 20, 8);
        assert!(out.contains("l10"));
        assert!(out.contains("[show less]"));

        // control sits on the last content row
        app.handle_action(Action::Click(5));
        assert_eq!(preview_state(&app), PreviewState::Collapsed);

        let out = draw(&mut app, 20, 8);
        assert!(out.contains("│l1"));
        assert!(out.contains("[show more]"));
    }

    #[test]
    fn test_expanded_preview_wraps_long_lines() {
        let preview = TextPreview::new("short\nthis line is much wider than the area TAILWORD", 1)
            .unwrap();
        let mut app = ViewerApp::preview("notes", preview);
        app.handle_action(Action::Toggle);
        let out = draw(&mut app, 22, 9);
        assert!(out.contains("TAILWORD"));
        assert!(out.contains("[show less]"));
    }

    #[test]
    fn test_markdown_scroll_is_clamped() {
        let mut app = ViewerApp::markdown("doc", render("a\nb\nc"));
        app.handle_action(Action::Bottom);
        // 5 rendered lines, 3 visible rows inside the border
        draw(&mut app, 20, 6);
        let ViewerMode::Markdown { scroll, .. } = app.mode else {
            panic!("not markdown");
        };
        assert_eq!(scroll, 2);
    }

    #[test]
    fn test_scroll_up_saturates() {
        let mut app = ViewerApp::markdown("doc", render("a"));
        app.handle_action(Action::Up);
        let ViewerMode::Markdown { scroll, .. } = app.mode else {
            panic!("not markdown");
        };
        assert_eq!(scroll, 0);
    }

    #[test]
    fn test_footer_hint() {
        let mut app = ViewerApp::markdown("doc", render("# Title"));
        let out = draw(&mut app, 50, 5);
        assert!(out.contains("q quit"));
        assert!(out.contains("Title"));
    }
}
