//! Flattened search result list
//!
//! Replaces the tab content whenever the query is non-empty. Rows keep
//! catalog order (tabs, then services within each tab); no ranking.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use homedeck_app::Theme;
use homedeck_core::SearchHit;

use crate::theme::{icons, styles};

/// Widget displaying search hits across all tabs
pub struct SearchResults<'a> {
    hits: &'a [SearchHit<'a>],
    query: &'a str,
    selected: usize,
    copied_url: Option<&'a str>,
    theme: Theme,
}

impl<'a> SearchResults<'a> {
    pub fn new(hits: &'a [SearchHit<'a>], query: &'a str, selected: usize, theme: Theme) -> Self {
        Self {
            hits,
            query,
            selected,
            copied_url: None,
            theme,
        }
    }

    pub fn copied_url(mut self, url: Option<&'a str>) -> Self {
        self.copied_url = url;
        self
    }

    fn hit_line(&self, index: usize, hit: &SearchHit<'_>) -> Line<'static> {
        let theme = self.theme;
        let selected = index == self.selected;

        let name_style = if selected {
            styles::focused_selected(theme)
        } else {
            styles::text_bright(theme)
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(hit.tab_name.to_string(), styles::text_muted(theme)),
            Span::styled(" ▸ ", styles::text_muted(theme)),
            Span::styled(format!(" {} ", hit.service.name), name_style),
            Span::styled(
                hit.service.description.clone(),
                styles::text_secondary(theme),
            ),
            Span::raw("  "),
            Span::styled(hit.service.url.clone(), styles::accent(theme)),
        ];

        if self.copied_url == Some(hit.service.url.as_str()) {
            spans.push(Span::styled(
                format!(" {} copied", icons::COPIED),
                styles::status_green(theme),
            ));
        }

        Line::from(spans)
    }
}

impl Widget for SearchResults<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.theme, true)
            .title(format!(" Results · {} ", self.hits.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.hits.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                format!(" no matches for \"{}\"", self.query.trim()),
                styles::text_muted(self.theme),
            )))
            .render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let offset = self.selected.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = self
            .hits
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, hit)| self.hit_line(i, hit))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
