//! homedeck-tui - Terminal UI for homedeck
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! lifecycle, event polling, the main loop, theming, and the widget set.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
