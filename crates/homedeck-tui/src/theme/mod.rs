//! Centralized theme system for the TUI.
//!
//! This module provides:
//! - `palette` - Color schemes for the dark and light themes
//! - `styles` - Semantic style builder functions
//! - `icons` - Glyph constants and spinner frames

pub mod icons;
pub mod palette;
pub mod styles;
