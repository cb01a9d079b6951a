//! Search input prompt widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use homedeck_app::Theme;

use crate::theme::styles;

/// Inline search prompt: `/query_ [3 matches]`
pub struct SearchPrompt<'a> {
    query: &'a str,
    /// Whether the prompt is actively capturing keys (shows the cursor)
    active: bool,
    hit_count: usize,
    theme: Theme,
}

impl<'a> SearchPrompt<'a> {
    pub fn new(query: &'a str, active: bool, hit_count: usize, theme: Theme) -> Self {
        Self {
            query,
            active,
            hit_count,
            theme,
        }
    }
}

impl Widget for SearchPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                "/",
                styles::status_yellow(theme).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.query.to_string(), styles::text_bright(theme)),
        ];

        if self.active {
            spans.push(Span::styled("_", styles::status_yellow(theme)));
        }

        if !self.query.trim().is_empty() {
            let status_style = if self.hit_count > 0 {
                styles::status_green(theme)
            } else {
                styles::status_red(theme)
            };
            let noun = if self.hit_count == 1 { "match" } else { "matches" };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("[{} {}]", self.hit_count, noun),
                status_style,
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(widget: SearchPrompt<'_>) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(widget, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_prompt_shows_query_and_count() {
        let content = render_to_string(SearchPrompt::new("git", true, 2, Theme::Dark));
        assert!(content.contains("/git_"));
        assert!(content.contains("[2 matches]"));
    }

    #[test]
    fn test_single_hit_uses_singular() {
        let content = render_to_string(SearchPrompt::new("git", false, 1, Theme::Dark));
        assert!(content.contains("[1 match]"));
        // No cursor while inactive.
        assert!(!content.contains("git_"));
    }

    #[test]
    fn test_blank_query_has_no_count() {
        let content = render_to_string(SearchPrompt::new("", true, 0, Theme::Dark));
        assert!(!content.contains('['));
    }
}
