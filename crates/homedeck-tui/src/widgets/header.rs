//! Header bar widget
//!
//! Shows the app title, the catalog source, and a short catalog summary.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use homedeck_app::state::AppState;

use crate::theme::{palette::palette, styles};

/// Main header showing app title, catalog source, and summary
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn summary(&self) -> Option<String> {
        let catalog = self.state.catalog.as_ref()?;
        Some(format!(
            "{} hosts · {} services",
            catalog.tabs.len(),
            catalog.service_count()
        ))
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.state.theme;
        let block = styles::glass_block(theme, false)
            .style(Style::default().bg(palette(theme).card_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("homedeck", styles::accent_bold(theme)),
            Span::raw("  "),
            Span::styled(
                self.state.settings.catalog.source.clone(),
                styles::text_muted(theme),
            ),
        ]);
        Paragraph::new(title).render(inner, buf);

        if let Some(summary) = self.summary() {
            let right = Line::from(vec![
                Span::styled(summary, styles::text_secondary(theme)),
                Span::raw(" "),
            ]);
            Paragraph::new(right)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}
