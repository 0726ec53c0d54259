//! Collapsible text preview state.
//!
//! [`TextPreview`] owns a full text and a line limit. While
//! [`PreviewState::Collapsed`] it exposes only the first `line_limit` lines;
//! while [`PreviewState::Expanded`] it exposes the text unmodified. A control
//! ("show more" / "show less") exists only when the text has more lines than
//! the limit.

use serde::{Deserialize, Serialize};

use crate::config::{validate_line_limit, ConfigError, PreviewConfig};

/// Display state of a text preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewState {
    /// Only the first `line_limit` lines are shown.
    #[default]
    Collapsed,
    /// The full text is shown.
    Expanded,
}

impl PreviewState {
    /// State after the control is activated.
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

impl std::fmt::Display for PreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collapsed => write!(f, "collapsed"),
            Self::Expanded => write!(f, "expanded"),
        }
    }
}

/// A long text with a collapsed preview and an expand/collapse control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPreview {
    full_text: String,
    line_limit: usize,
    line_count: usize,
    state: PreviewState,
    show_more_label: String,
    show_less_label: String,
}

impl TextPreview {
    /// Create a collapsed preview.
    ///
    /// A `line_limit` of zero or less is rejected with
    /// [`ConfigError::InvalidLineLimit`]; it is never clamped.
    pub fn new(text: impl Into<String>, line_limit: i64) -> Result<Self, ConfigError> {
        Self::from_config(
            text,
            &PreviewConfig {
                line_limit,
                ..PreviewConfig::default()
            },
        )
    }

    /// Create a collapsed preview using limit and labels from configuration.
    pub fn from_config(text: impl Into<String>, config: &PreviewConfig) -> Result<Self, ConfigError> {
        let line_limit = validate_line_limit(config.line_limit)?;
        let full_text = text.into();
        let line_count = full_text.lines().count();

        Ok(Self {
            full_text,
            line_limit,
            line_count,
            state: PreviewState::Collapsed,
            show_more_label: config.show_more_label.clone(),
            show_less_label: config.show_less_label.clone(),
        })
    }

    /// Current display state.
    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// The untruncated text.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Maximum number of lines shown while collapsed.
    pub fn line_limit(&self) -> usize {
        self.line_limit
    }

    /// Natural line count of the full text.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Whether the text is long enough to need an expand/collapse control.
    pub fn has_control(&self) -> bool {
        self.line_count > self.line_limit
    }

    /// Label of the control for the current state, or `None` if there is no control.
    pub fn control_label(&self) -> Option<&str> {
        if !self.has_control() {
            return None;
        }
        Some(match self.state {
            PreviewState::Collapsed => &self.show_more_label,
            PreviewState::Expanded => &self.show_less_label,
        })
    }

    /// Lines currently displayed.
    pub fn visible_lines(&self) -> Vec<&str> {
        match self.state {
            PreviewState::Collapsed if self.has_control() => {
                self.full_text.lines().take(self.line_limit).collect()
            }
            _ => self.full_text.lines().collect(),
        }
    }

    /// Text currently displayed.
    ///
    /// Expanded (or short) previews return the full text byte-for-byte.
    pub fn visible_text(&self) -> String {
        match self.state {
            PreviewState::Collapsed if self.has_control() => self.visible_lines().join("\n"),
            _ => self.full_text.clone(),
        }
    }

    /// Show the full text.
    pub fn expand(&mut self) {
        self.state = PreviewState::Expanded;
    }

    /// Show only the first `line_limit` lines.
    pub fn collapse(&mut self) {
        self.state = PreviewState::Collapsed;
    }

    /// Switch between collapsed and expanded.
    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    /// Activate the control, as a click on its label would.
    ///
    /// Returns `false` (and leaves the state alone) when there is no control.
    pub fn activate_control(&mut self) -> bool {
        if !self.has_control() {
            return false;
        }
        self.toggle();
        tracing::debug!(state = %self.state, "preview control activated");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "line 1\nline 2\nline 3\nline 4\nline 5";

    #[test]
    fn test_starts_collapsed() {
        let preview = TextPreview::new(LONG, 2).unwrap();
        assert_eq!(preview.state(), PreviewState::Collapsed);
        assert_eq!(preview.line_count(), 5);
        assert_eq!(preview.line_limit(), 2);
    }

    #[test]
    fn test_short_text_has_no_control() {
        let preview = TextPreview::new("one\ntwo", 2).unwrap();
        assert!(!preview.has_control());
        assert_eq!(preview.control_label(), None);
        assert_eq!(preview.visible_text(), "one\ntwo");
    }

    #[test]
    fn test_short_text_activation_is_noop() {
        let mut preview = TextPreview::new("only line", 3).unwrap();
        assert!(!preview.activate_control());
        assert_eq!(preview.state(), PreviewState::Collapsed);
        assert_eq!(preview.visible_text(), "only line");
    }

    #[test]
    fn test_collapsed_shows_exactly_limit_lines() {
        let preview = TextPreview::new(LONG, 3).unwrap();
        assert_eq!(preview.visible_lines(), vec!["line 1", "line 2", "line 3"]);
        assert_eq!(preview.visible_text(), "line 1\nline 2\nline 3");
        assert_eq!(preview.control_label(), Some("show more"));
    }

    #[test]
    fn test_toggle_cycle() {
        let mut preview = TextPreview::new(LONG, 2).unwrap();

        assert!(preview.activate_control());
        assert_eq!(preview.state(), PreviewState::Expanded);
        assert_eq!(preview.control_label(), Some("show less"));
        assert_eq!(preview.visible_text(), LONG);

        assert!(preview.activate_control());
        assert_eq!(preview.state(), PreviewState::Collapsed);
        assert_eq!(preview.control_label(), Some("show more"));
        assert_eq!(preview.visible_text(), "line 1\nline 2");
    }

    #[test]
    fn test_expand_keeps_text_unmodified() {
        let text = "a\r\nb\nc\n";
        let mut preview = TextPreview::new(text, 1).unwrap();
        preview.expand();
        assert_eq!(preview.visible_text(), text);
    }

    #[test]
    fn test_explicit_transitions_are_idempotent() {
        let mut preview = TextPreview::new(LONG, 1).unwrap();
        preview.expand();
        preview.expand();
        assert_eq!(preview.state(), PreviewState::Expanded);
        preview.collapse();
        preview.collapse();
        assert_eq!(preview.state(), PreviewState::Collapsed);
    }

    #[test]
    fn test_trailing_newline_not_counted() {
        let preview = TextPreview::new("a\nb\n", 2).unwrap();
        assert_eq!(preview.line_count(), 2);
        assert!(!preview.has_control());
    }

    #[test]
    fn test_empty_text() {
        let preview = TextPreview::new("", 1).unwrap();
        assert_eq!(preview.line_count(), 0);
        assert!(!preview.has_control());
        assert_eq!(preview.visible_text(), "");
    }

    #[test]
    fn test_non_positive_limit_is_rejected() {
        assert!(matches!(
            TextPreview::new(LONG, 0),
            Err(ConfigError::InvalidLineLimit(0))
        ));
        assert!(matches!(
            TextPreview::new(LONG, -3),
            Err(ConfigError::InvalidLineLimit(-3))
        ));
    }

    #[test]
    fn test_custom_labels_from_config() {
        let config = PreviewConfig {
            line_limit: 1,
            show_more_label: "expand".into(),
            show_less_label: "collapse".into(),
        };
        let mut preview = TextPreview::from_config(LONG, &config).unwrap();
        assert_eq!(preview.control_label(), Some("expand"));
        preview.toggle();
        assert_eq!(preview.control_label(), Some("collapse"));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(PreviewState::Collapsed.to_string(), "collapsed");
        assert_eq!(PreviewState::Expanded.to_string(), "expanded");
        assert_eq!(PreviewState::Collapsed.toggled(), PreviewState::Expanded);
    }
}
