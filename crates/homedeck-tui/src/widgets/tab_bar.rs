//! Tab bar widget for host navigation
//!
//! One tab per host in document order, numbered to match the 1-9 jump
//! keys. Dimmed while search mode has taken over the content area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use homedeck_app::Theme;
use homedeck_core::Catalog;

use crate::theme::styles;

/// Widget displaying host tabs in a single row
pub struct TabBar<'a> {
    catalog: &'a Catalog,
    active_index: Option<usize>,
    theme: Theme,
    dimmed: bool,
}

impl<'a> TabBar<'a> {
    pub fn new(catalog: &'a Catalog, active_index: Option<usize>, theme: Theme) -> Self {
        Self {
            catalog,
            active_index,
            theme,
            dimmed: false,
        }
    }

    /// Dim the bar while search results replace the tab content.
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        self.catalog
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let name = truncate_name(&tab.name, 14);
                let number = if i < 9 {
                    format!("{} ", i + 1)
                } else {
                    String::new()
                };
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(number, styles::text_muted(self.theme)),
                    Span::raw(format!("{} ", name)),
                ])
            })
            .collect()
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.catalog.tabs.is_empty() || area.height == 0 {
            return;
        }

        let highlight = if self.dimmed {
            styles::text_muted(self.theme)
        } else {
            styles::focused_selected(self.theme)
        };

        let tabs = Tabs::new(self.tab_titles())
            .select(self.active_index.unwrap_or(0))
            .style(styles::text_secondary(self.theme))
            .highlight_style(highlight)
            .divider("│");

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        tabs.render(padded_area, buf);
    }
}

/// Truncate a name to max length, adding ellipsis if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let truncated: String = name.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
