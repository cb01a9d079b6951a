//! Key event handlers for UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Route a key press to a message based on the current UI mode.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::SearchInput => handle_search_input_key(key),
        UiMode::Browse => handle_browse_key(state, key),
    }
}

/// Keys while the search prompt is capturing text.
fn handle_search_input_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('u') => Some(Message::ClearSearch),
        InputKey::Esc | InputKey::Enter => Some(Message::CancelSearch),
        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::Up => Some(Message::SelectPrevRow),
        InputKey::Down => Some(Message::SelectNextRow),
        InputKey::Char(c) => Some(Message::SearchChar(c)),
        _ => None,
    }
}

/// Keys in normal browsing mode.
fn handle_browse_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::ReloadCatalog),
        InputKey::Char('/') => Some(Message::StartSearch),

        // Esc backs out of an active search before anything else.
        InputKey::Esc => {
            if state.in_search_mode() {
                Some(Message::ClearSearch)
            } else {
                None
            }
        }

        InputKey::Tab | InputKey::Char(']') => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Char('[') => Some(Message::PrevTab),
        InputKey::Char(c @ '1'..='9') => {
            Some(Message::SelectTabByIndex(c as usize - '1' as usize))
        }

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevRow),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextRow),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirstRow),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLastRow),

        InputKey::Enter | InputKey::Char('o') => Some(Message::OpenSelected),
        InputKey::Char('c') => Some(Message::CopySelected { alternate: false }),
        InputKey::Char('C') => Some(Message::CopySelected { alternate: true }),

        InputKey::Char('s') => Some(Message::ToggleSidebar),
        InputKey::Char('t') => Some(Message::ToggleTheme),

        _ => None,
    }
}
