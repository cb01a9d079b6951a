//! Service list for the active tab
//!
//! One row per service in document order: glyph, name, description, and the
//! primary URL. The row under the cursor is highlighted; a URL that was
//! just copied carries a transient check mark.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use homedeck_app::Theme;
use homedeck_core::{Service, Tab};

use crate::theme::{icons, styles};

/// Widget displaying the active tab's services
pub struct ServiceList<'a> {
    tab: &'a Tab,
    selected: usize,
    copied_url: Option<&'a str>,
    theme: Theme,
}

impl<'a> ServiceList<'a> {
    pub fn new(tab: &'a Tab, selected: usize, theme: Theme) -> Self {
        Self {
            tab,
            selected,
            copied_url: None,
            theme,
        }
    }

    /// URL currently carrying the transient "copied" indicator.
    pub fn copied_url(mut self, url: Option<&'a str>) -> Self {
        self.copied_url = url;
        self
    }

    fn service_line(&self, index: usize, service: &Service) -> Line<'static> {
        let theme = self.theme;
        let selected = index == self.selected;

        let glyph = service
            .icon
            .clone()
            .unwrap_or_else(|| icons::SERVICE_FALLBACK.to_string());

        let name_style = if selected {
            styles::focused_selected(theme)
        } else {
            styles::text_bright(theme)
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(glyph, styles::text_secondary(theme)),
            Span::raw(" "),
            Span::styled(format!(" {} ", service.name), name_style),
            Span::styled(service.description.clone(), styles::text_secondary(theme)),
            Span::raw("  "),
            Span::styled(service.url.clone(), styles::accent(theme)),
        ];

        if service.alt_url.is_some() {
            spans.push(Span::styled(" ⇄", styles::text_muted(theme)));
        }

        if self.copied_url == Some(service.url.as_str()) {
            spans.push(Span::styled(
                format!(" {} copied", icons::COPIED),
                styles::status_green(theme),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for ServiceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.theme, true)
            .title(format!(" {} {} ", self.tab.icon.glyph(), self.tab.name));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.tab.services.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " no services on this host",
                styles::text_muted(self.theme),
            )))
            .render(inner, buf);
            return;
        }

        // Keep the selected row in view when the list is taller than the area.
        let visible = inner.height as usize;
        let offset = self.selected.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = self
            .tab
            .services
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, service)| self.service_line(i, service))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
