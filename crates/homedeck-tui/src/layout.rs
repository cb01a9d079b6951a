//! Screen layout definitions for the TUI
//!
//! The layout mode is derived from the terminal width: narrow terminals
//! drop the sidebar entirely, wide ones show it when the user has it
//! toggled on.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width below which the sidebar is suppressed regardless of the toggle.
const NARROW_WIDTH: u16 = 90;

/// Fixed sidebar width in wide mode.
const SIDEBAR_WIDTH: u16 = 26;

/// Layout mode derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Enough room for the sidebar next to the content
    Wide,
    /// Content only; the sidebar toggle has no effect
    Narrow,
}

impl LayoutMode {
    pub fn for_width(width: u16) -> LayoutMode {
        if width < NARROW_WIDTH {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (title + catalog summary)
    pub header: Rect,

    /// Sidebar listing all tabs; `None` when hidden or in narrow mode
    pub sidebar: Option<Rect>,

    /// Main content (tab bar + service list, or search results)
    pub content: Rect,

    /// One-line status bar with keybinding hints
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `sidebar_visible` - The user's sidebar toggle; honored in wide mode only
pub fn create(area: Rect, sidebar_visible: bool) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered container)
        Constraint::Min(3),    // Middle (sidebar + content)
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let header = chunks[0];
    let middle = chunks[1];
    let status = chunks[2];

    let show_sidebar = sidebar_visible && LayoutMode::for_width(area.width) == LayoutMode::Wide;
    let (sidebar, content) = if show_sidebar {
        let cols =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .split(middle);
        (Some(cols[0]), cols[1])
    } else {
        (None, middle)
    };

    ScreenAreas {
        header,
        sidebar,
        content,
        status,
    }
}
