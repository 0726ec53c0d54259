//! Markdown styling configuration.
//!
//! Provides [`MarkdownStyles`] which maps document nodes to ratatui styles.

use ratatui::style::{Modifier, Style};

use crate::theme::Theme;

/// Styles for rendering markdown nodes.
#[derive(Debug, Clone)]
pub struct MarkdownStyles {
    /// Heading style.
    pub heading: Style,
    /// Code block line style.
    pub code_block: Style,
    /// Italic emphasis.
    pub emphasis: Style,
    /// Bold emphasis.
    pub strong: Style,
    /// List bullet style.
    pub list_marker: Style,
    /// Normal text style.
    pub text: Style,
    /// Style for unparsed plain-text fallback.
    pub plain: Style,
    /// Preview control label style.
    pub control: Style,
}

impl MarkdownStyles {
    /// Create styles from a theme.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            heading: Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            code_block: Style::default()
                .fg(theme.secondary)
                .bg(theme.surface),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            list_marker: Style::default().fg(theme.muted),
            text: Style::default().fg(theme.text),
            plain: Style::default().fg(theme.subtext),
            control: Style::default()
                .fg(theme.info)
                .add_modifier(Modifier::UNDERLINED),
        }
    }
}

impl Default for MarkdownStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}
