//! Full-screen error view
//!
//! Shown only when a load fails and there is no previously loaded catalog
//! to fall back to. Offers the retry action.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use homedeck_app::Theme;

use crate::theme::styles;

/// Centered error box with the failure message and a retry hint
pub struct ErrorView<'a> {
    message: &'a str,
    source: &'a str,
    theme: Theme,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str, source: &'a str, theme: Theme) -> Self {
        Self {
            message,
            source,
            theme,
        }
    }
}

impl Widget for ErrorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let width = 60.min(area.width.saturating_sub(4)).max(20);
        let height = 7;

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup_area = Rect::new(x, y, width, height.min(area.height));

        Clear.render(popup_area, buf);
        let block = styles::modal_block(theme, " Catalog unavailable ");
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        if inner.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(
                self.message.to_string(),
                styles::status_red(theme),
            )),
            Line::from(Span::styled(
                self.source.to_string(),
                styles::text_muted(theme),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("r", styles::accent_bold(theme)),
                Span::styled(" retry   ", styles::text_secondary(theme)),
                Span::styled("q", styles::accent_bold(theme)),
                Span::styled(" quit", styles::text_secondary(theme)),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
