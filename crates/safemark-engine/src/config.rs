//! Configuration types for safemark.
//!
//! This module defines the configuration schema for the preview toggle and
//! the markdown renderer, plus JSON load/save and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for safemark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Text preview settings.
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Markdown renderer settings.
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

/// Settings for the collapsible text preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Maximum number of lines shown while collapsed.
    /// Non-positive values are rejected by [`Config::validate`].
    #[serde(default = "default_line_limit")]
    pub line_limit: i64,

    /// Control label while collapsed.
    #[serde(default = "default_show_more_label")]
    pub show_more_label: String,

    /// Control label while expanded.
    #[serde(default = "default_show_less_label")]
    pub show_less_label: String,
}

fn default_line_limit() -> i64 {
    3
}

fn default_show_more_label() -> String {
    "show more".into()
}

fn default_show_less_label() -> String {
    "show less".into()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            line_limit: default_line_limit(),
            show_more_label: default_show_more_label(),
            show_less_label: default_show_less_label(),
        }
    }
}

/// Settings for the markdown renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Inputs longer than this (in bytes) are rendered as plain text.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

fn default_max_input_bytes() -> usize {
    1024 * 1024
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl Config {
    /// Load configuration from a file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Check limits that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_line_limit(self.preview.line_limit)?;
        if self.markdown.max_input_bytes == 0 {
            return Err(ConfigError::InvalidInputLimit);
        }
        Ok(())
    }
}

/// Validate a preview line limit, returning it as a count.
pub fn validate_line_limit(limit: i64) -> Result<usize, ConfigError> {
    if limit <= 0 {
        return Err(ConfigError::InvalidLineLimit(limit));
    }
    usize::try_from(limit).map_err(|_| ConfigError::InvalidLineLimit(limit))
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Preview line limit is zero or negative.
    #[error("preview line limit must be a positive integer, got {0}")]
    InvalidLineLimit(i64),

    /// Markdown input limit is zero.
    #[error("markdown max_input_bytes must be greater than zero")]
    InvalidInputLimit,
}
