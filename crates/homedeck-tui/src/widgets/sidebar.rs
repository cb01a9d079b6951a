//! Sidebar widget
//!
//! Lists every host with its service count and shows the active host's
//! tooltip metadata underneath. Wide layouts only.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use homedeck_app::state::AppState;

use crate::theme::styles;

/// Sidebar listing hosts plus details for the active one
pub struct Sidebar<'a> {
    state: &'a AppState,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn host_lines(&self) -> Vec<Line<'static>> {
        let theme = self.state.theme;
        let Some(catalog) = &self.state.catalog else {
            return vec![];
        };
        let active = self.state.active_tab.as_deref();

        catalog
            .tabs
            .iter()
            .map(|tab| {
                let marker_style = if active == Some(tab.key.as_str()) {
                    styles::accent_bold(theme)
                } else {
                    styles::text_secondary(theme)
                };
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(tab.icon.glyph().to_string(), styles::text_secondary(theme)),
                    Span::raw(" "),
                    Span::styled(tab.name.clone(), marker_style),
                    Span::styled(
                        format!(" ({})", tab.services.len()),
                        styles::text_muted(theme),
                    ),
                ])
            })
            .collect()
    }

    fn detail_lines(&self) -> Vec<Line<'static>> {
        let theme = self.state.theme;
        let Some(tab) = self.state.active_tab() else {
            return vec![];
        };

        let mut lines = vec![Line::raw("")];
        let tooltip = &tab.tooltip;
        if let Some(title) = &tooltip.title {
            lines.push(Line::from(Span::styled(
                format!(" {title}"),
                styles::text_bright(theme),
            )));
        }
        for field in [&tooltip.description, &tooltip.location, &tooltip.specs] {
            if let Some(text) = field {
                lines.push(Line::from(Span::styled(
                    format!(" {text}"),
                    styles::text_secondary(theme),
                )));
            }
        }
        if let Some(main_url) = &tab.main_url {
            lines.push(Line::from(Span::styled(
                format!(" {main_url}"),
                styles::accent(theme),
            )));
        }
        lines
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.state.theme;
        let block = styles::glass_block(theme, false).title(" Hosts ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = self.host_lines();
        lines.extend(self.detail_lines());
        Paragraph::new(lines).render(inner, buf);
    }
}
