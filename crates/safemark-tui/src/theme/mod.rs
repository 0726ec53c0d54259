//! Theme components for the TUI.
//!
//! This module provides [`Theme`], the color palette shared by all widgets
//! (Catppuccin Mocha, or High Contrast under `NO_COLOR`).

mod colors;

pub use colors::Theme;
