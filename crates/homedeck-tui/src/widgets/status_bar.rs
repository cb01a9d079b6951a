//! Status bar with contextual keybinding hints and load/copy flags

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use homedeck_app::state::{AppState, UiMode};

use crate::theme::{icons, styles};

/// One-line status bar at the bottom of the screen
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.ui_mode {
            UiMode::SearchInput => " esc done  ↵ confirm  ctrl-u clear  ↑↓ select",
            UiMode::Browse => {
                if self.state.in_search_mode() {
                    " esc clear  ↵ open  c copy  / edit query  q quit"
                } else {
                    " / search  ⇥ tabs  ↵ open  c copy  r reload  t theme  s sidebar  q quit"
                }
            }
        }
    }

    fn flags(&self) -> Vec<Span<'static>> {
        let theme = self.state.theme;
        let mut spans = Vec::new();

        if self.state.copied_url().is_some() {
            spans.push(Span::styled(
                format!("{} copied ", icons::COPIED),
                styles::status_green(theme),
            ));
        }

        if self.state.loading {
            spans.push(Span::styled(
                format!("{} reloading ", icons::RELOADING),
                styles::status_yellow(theme),
            ));
        } else if self.state.load_error.is_some() && self.state.catalog.is_some() {
            // Reload failed; the previous catalog is still on display.
            spans.push(Span::styled(
                format!("{} reload failed ", icons::WARNING),
                styles::status_red(theme),
            ));
        }

        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let theme = self.state.theme;

        Paragraph::new(Line::from(Span::styled(
            self.hints(),
            styles::text_muted(theme),
        )))
        .render(area, buf);

        let flags = self.flags();
        if !flags.is_empty() {
            Paragraph::new(Line::from(flags))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedeck_core::{Catalog, Tab};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(StatusBar::new(state), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(
            seq,
            Catalog {
                tabs: vec![Tab {
                    name: "A".into(),
                    key: "a".into(),
                    id: 0,
                    main_url: None,
                    icon: Default::default(),
                    tooltip: Default::default(),
                    services: vec![],
                }],
            },
        );
        state
    }

    #[test]
    fn test_browse_hints() {
        let state = loaded_state();
        let content = render_to_string(&state);
        assert!(content.contains("search"));
        assert!(content.contains("reload"));
        assert!(content.contains("quit"));
    }

    #[test]
    fn test_search_input_hints() {
        let mut state = loaded_state();
        state.ui_mode = UiMode::SearchInput;
        let content = render_to_string(&state);
        assert!(content.contains("esc done"));
    }

    #[test]
    fn test_reloading_flag() {
        let mut state = loaded_state();
        state.begin_load();
        let content = render_to_string(&state);
        assert!(content.contains("reloading"));
    }

    #[test]
    fn test_reload_failed_flag_with_catalog_retained() {
        let mut state = loaded_state();
        let seq = state.begin_load();
        state.apply_load_failure(seq, "boom".into());
        let content = render_to_string(&state);
        assert!(content.contains("reload failed"));
    }

    #[test]
    fn test_copied_flag() {
        let mut state = loaded_state();
        state.mark_copied("http://x".into());
        let content = render_to_string(&state);
        assert!(content.contains("copied"));
    }
}
