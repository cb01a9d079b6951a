//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::toast::Toast;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::ReloadCatalog => {
            let seq = state.begin_load();
            UpdateResult::action(UpdateAction::LoadCatalog { seq })
        }

        Message::CatalogLoaded { seq, catalog } => {
            state.apply_catalog(seq, catalog);
            UpdateResult::none()
        }

        Message::CatalogLoadFailed { seq, error } => {
            let applied = state.apply_load_failure(seq, error.clone());
            // With a catalog on screen the old content stays visible and
            // the failure becomes a toast; the error view is reserved for
            // the no-catalog case.
            if applied && state.catalog.is_some() {
                state.push_toast(Toast::error(format!("Reload failed: {error}")));
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tab Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectTab { key } => {
            state.select_tab(&key);
            UpdateResult::none()
        }

        Message::SelectTabByIndex(index) => {
            state.select_tab_by_index(index);
            UpdateResult::none()
        }

        Message::NextTab => {
            state.next_tab();
            UpdateResult::none()
        }

        Message::PrevTab => {
            state.prev_tab();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Row Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNextRow => {
            state.select_next_row();
            UpdateResult::none()
        }

        Message::SelectPrevRow => {
            state.select_prev_row();
            UpdateResult::none()
        }

        Message::SelectFirstRow => {
            state.select_first_row();
            UpdateResult::none()
        }

        Message::SelectLastRow => {
            state.select_last_row();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }

        Message::CancelSearch => {
            // Leave input mode but keep the query: results stay visible
            // until the query is cleared.
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }

        Message::ClearSearch => {
            state.query.clear();
            state.ui_mode = UiMode::Browse;
            state.selected_row = 0;
            UpdateResult::none()
        }

        Message::SearchChar(c) => {
            state.query.push(c);
            state.selected_row = 0;
            UpdateResult::none()
        }

        Message::SearchBackspace => {
            state.query.pop();
            state.selected_row = 0;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // View Toggles
        // ─────────────────────────────────────────────────────────
        Message::ToggleSidebar => {
            state.sidebar_visible = !state.sidebar_visible;
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Clipboard / Open
        // ─────────────────────────────────────────────────────────
        Message::OpenSelected => {
            match state.selected_service().map(|s| s.url.clone()) {
                Some(url) => UpdateResult::message(Message::OpenUrl { url }),
                None => UpdateResult::none(),
            }
        }

        Message::CopySelected { alternate } => {
            let url = if alternate {
                state.selected_service().and_then(|s| s.alt_url.clone())
            } else {
                state.selected_service().map(|s| s.url.clone())
            };
            match url {
                Some(url) => UpdateResult::message(Message::CopyUrl { url }),
                None => {
                    if alternate && state.selected_service().is_some() {
                        state.push_toast(Toast::info("No alternate URL"));
                    }
                    UpdateResult::none()
                }
            }
        }

        Message::OpenUrl { url } => UpdateResult::action(UpdateAction::OpenExternal { url }),

        Message::CopyUrl { url } => UpdateResult::action(UpdateAction::CopyToClipboard { url }),

        Message::CopyCompleted { url } => {
            state.push_toast(Toast::info("Copied to clipboard"));
            state.mark_copied(url);
            UpdateResult::none()
        }

        Message::CopyFailed { url, error } => {
            tracing::warn!("Copy failed for {url}: {error}");
            state.push_toast(Toast::error(format!("Copy failed — copy manually: {url}")));
            UpdateResult::none()
        }
    }
}
