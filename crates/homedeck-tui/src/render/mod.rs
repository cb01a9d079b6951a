//! Main render/view function (View in TEA pattern)
//!
//! Pure projection of `AppState` onto the frame. Full-screen states
//! (first load, unrecoverable error view) short-circuit; otherwise the
//! frame is header + optional sidebar + content + status bar, with toasts
//! floating on top.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use homedeck_app::state::{AppState, UiMode};

use crate::layout;
use crate::theme::{palette::palette, styles};
use crate::widgets::{
    ErrorView, LoadingView, MainHeader, SearchPrompt, SearchResults, ServiceList, Sidebar,
    StatusBar, TabBar, ToastStack,
};

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = state.theme;

    // Fill entire terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette(theme).deepest_bg));
    frame.render_widget(bg_block, area);

    // Without a catalog there is nothing to browse: the loading screen or
    // the error view owns the whole frame.
    if state.catalog.is_none() {
        if let Some(loading) = &state.loading_state {
            frame.render_widget(LoadingView::new(loading, theme), area);
        } else if let Some(error) = &state.load_error {
            frame.render_widget(
                ErrorView::new(error, &state.settings.catalog.source, theme),
                area,
            );
        } else {
            render_blank_start(frame, area, state);
        }
        return;
    }

    let areas = layout::create(area, state.sidebar_visible);

    frame.render_widget(MainHeader::new(state), areas.header);

    if let Some(sidebar_area) = areas.sidebar {
        frame.render_widget(Sidebar::new(state), sidebar_area);
    }

    render_content(frame, areas.content, state);

    frame.render_widget(StatusBar::new(state), areas.status);

    // Toasts float above everything else.
    frame.render_widget(ToastStack::new(&state.toasts, theme), area);
}

/// Tab strip (or search prompt) plus the service rows below it.
fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme;
    let Some(catalog) = &state.catalog else {
        return;
    };

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

    let prompt_open = state.ui_mode == UiMode::SearchInput;
    if prompt_open || state.in_search_mode() {
        let hits = state.search_hits();
        frame.render_widget(
            SearchPrompt::new(&state.query, prompt_open, hits.len(), theme),
            rows[0],
        );

        // A non-blank query replaces the tab content with the flattened
        // result list; a still-blank prompt keeps the active tab below.
        if state.in_search_mode() {
            frame.render_widget(
                SearchResults::new(&hits, &state.query, state.selected_row, theme)
                    .copied_url(state.copied_url()),
                rows[1],
            );
            return;
        }
    } else {
        frame.render_widget(
            TabBar::new(catalog, state.active_tab_index(), theme),
            rows[0],
        );
    }

    if let Some(tab) = state.active_tab() {
        frame.render_widget(
            ServiceList::new(tab, state.selected_row, theme).copied_url(state.copied_url()),
            rows[1],
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "catalog has no tabs",
                styles::text_muted(theme),
            )))
            .alignment(Alignment::Center),
            rows[1],
        );
    }
}

/// One frame can slip in between startup and the first ReloadCatalog
/// message; keep it intentional rather than blank.
fn render_blank_start(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "starting…",
            styles::text_muted(state.theme),
        )))
        .alignment(Alignment::Center),
        line_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedeck_core::{Catalog, Service, Tab};
    use ratatui::{backend::TestBackend, Terminal};

    fn catalog() -> Catalog {
        Catalog {
            tabs: vec![
                Tab {
                    name: "Hydra".into(),
                    key: "hydra".into(),
                    id: 1,
                    main_url: None,
                    icon: Default::default(),
                    tooltip: Default::default(),
                    services: vec![Service {
                        name: "Plex".into(),
                        url: "http://x:32400".into(),
                        description: "media".into(),
                        icon: None,
                        alt_url: None,
                    }],
                },
                Tab {
                    name: "Forge".into(),
                    key: "forge".into(),
                    id: 2,
                    main_url: None,
                    icon: Default::default(),
                    tooltip: Default::default(),
                    services: vec![Service {
                        name: "Gitea".into(),
                        url: "http://y:3000".into(),
                        description: "git".into(),
                        icon: None,
                        alt_url: None,
                    }],
                },
            ],
        }
    }

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_first_load_renders_loading_screen() {
        let mut state = AppState::new();
        state.begin_load();
        let content = draw(&state);
        // One of the cycling loading messages is on screen.
        assert!(content.contains("..."));
        // No browsing chrome yet.
        assert!(!content.contains("Hosts"));
    }

    #[test]
    fn test_failed_first_load_renders_error_view() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_load_failure(seq, "HTTP 502".into());
        let content = draw(&state);
        assert!(content.contains("Catalog unavailable"));
        assert!(content.contains("HTTP 502"));
        assert!(content.contains("retry"));
    }

    #[test]
    fn test_browse_view_shows_tabs_sidebar_and_services() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog());
        let content = draw(&state);
        assert!(content.contains("homedeck"));
        assert!(content.contains("Hosts"));
        assert!(content.contains("Hydra"));
        assert!(content.contains("Plex"));
        // Inactive tab's services stay hidden.
        assert!(!content.contains("Gitea"));
    }

    #[test]
    fn test_search_mode_replaces_tab_content() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog());
        state.query = "git".into();
        let content = draw(&state);
        assert!(content.contains("Results · 1"));
        assert!(content.contains("Gitea"));
        assert!(!content.contains("Plex"));
    }

    #[test]
    fn test_reload_failure_keeps_catalog_on_screen() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog());
        let seq = state.begin_load();
        state.apply_load_failure(seq, "boom".into());
        let content = draw(&state);
        assert!(content.contains("Plex"));
        assert!(content.contains("reload failed"));
        assert!(!content.contains("Catalog unavailable"));
    }
}
