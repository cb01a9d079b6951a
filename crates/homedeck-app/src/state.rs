//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use rand::Rng;

use homedeck_core::{search, Catalog, SearchHit, Service, Tab};

use crate::config::{Settings, Theme};
use crate::toast::Toast;

/// How long the "copied" indicator stays lit for a URL.
pub const COPIED_MARKER_TTL: Duration = Duration::from_millis(1500);

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal browsing: tab bar, service list, sidebar
    #[default]
    Browse,

    /// Search input mode - capturing text for the query prompt
    SearchInput,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading State
// ─────────────────────────────────────────────────────────────────────────────

/// Loading messages to cycle through while the catalog is fetched
const LOADING_MESSAGES: &[&str] = &[
    "Reading the service catalog...",
    "Contacting the rack...",
    "Waking sleeping servers...",
    "Counting blinking LEDs...",
    "Pinging the basement...",
    "Negotiating with the router...",
    "Spinning up spinning rust...",
    "Dusting off the NAS...",
    "Untangling patch cables...",
    "Asking the homelab nicely...",
];

/// Loading state for the initial catalog fetch
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: String,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    /// Current index into LOADING_MESSAGES for cycling
    message_index: usize,
}

impl LoadingState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());

        Self {
            message: LOADING_MESSAGES[start_index].to_string(),
            animation_frame: 0,
            message_index: start_index,
        }
    }

    /// Tick animation frame and cycle the message every ~15 ticks
    /// (1.5 sec at the 100ms tick rate)
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.animation_frame.is_multiple_of(15) {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.message = LOADING_MESSAGES[self.message_index].to_string();
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Copied Marker
// ─────────────────────────────────────────────────────────────────────────────

/// Transient marker for the most recently copied URL.
///
/// Keyed by the exact URL string so identical URLs rendered in several
/// places light up consistently.
#[derive(Debug, Clone)]
pub struct CopiedMarker {
    pub url: String,
    at: Instant,
}

impl CopiedMarker {
    fn new(url: String) -> Self {
        Self {
            url,
            at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.at.elapsed() >= COPIED_MARKER_TTL
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Current application phase (used for app-level quitting state)
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// The loaded catalog. `None` until the first successful load; replaced
    /// wholesale on reload.
    pub catalog: Option<Catalog>,

    /// Key of the currently active tab
    pub active_tab: Option<String>,

    /// Current search query. Non-empty (after trimming) means search mode.
    pub query: String,

    /// Selected row within the active tab's services or the search results
    pub selected_row: usize,

    /// Sidebar visibility flag
    pub sidebar_visible: bool,

    /// Active color theme
    pub theme: Theme,

    /// True while a load is in flight
    pub loading: bool,

    /// Animation state for the full-screen loading view (first load only)
    pub loading_state: Option<LoadingState>,

    /// Sequence number of the most recently issued load. Completions
    /// carrying any other number are stale and discarded.
    pub load_seq: u64,

    /// Message of the most recent load failure, cleared on success
    pub load_error: Option<String>,

    /// Transient "copied" indicator
    pub copied: Option<CopiedMarker>,

    /// Active transient notifications
    pub toasts: Vec<Toast>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with settings
    pub fn with_settings(settings: Settings) -> Self {
        let theme = settings.ui.theme;
        let sidebar_visible = settings.ui.sidebar;
        Self {
            ui_mode: UiMode::Browse,
            phase: AppPhase::Running,
            settings,
            catalog: None,
            active_tab: None,
            query: String::new(),
            selected_row: 0,
            sidebar_visible,
            theme,
            loading: false,
            loading_state: None,
            load_seq: 0,
            load_error: None,
            copied: None,
            toasts: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Catalog Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Record that a new load was issued; returns its sequence number.
    ///
    /// The full-screen loading view only appears while there is no catalog
    /// to show; a reload keeps the current catalog on screen.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        if self.catalog.is_none() {
            self.loading_state = Some(LoadingState::new());
        }
        self.load_seq
    }

    /// Apply a completed load. Returns `false` when the completion is stale
    /// (an earlier load finishing after a newer one was issued).
    pub fn apply_catalog(&mut self, seq: u64, catalog: Catalog) -> bool {
        if seq != self.load_seq {
            tracing::debug!("Discarding stale load completion (seq {seq} != {})", self.load_seq);
            return false;
        }
        // Keep the user's tab across reloads when its key survived;
        // otherwise fall back to the first tab in document order.
        let keep = self
            .active_tab
            .as_deref()
            .filter(|key| catalog.has_tab(key))
            .map(str::to_string);
        self.active_tab = keep.or_else(|| catalog.first_tab_key().map(str::to_string));

        self.catalog = Some(catalog);
        self.loading = false;
        self.loading_state = None;
        self.load_error = None;
        self.clamp_selection();
        true
    }

    /// Apply a failed load. Returns `false` when the completion is stale.
    /// The previously displayed catalog (if any) is retained.
    pub fn apply_load_failure(&mut self, seq: u64, error: String) -> bool {
        if seq != self.load_seq {
            tracing::debug!("Discarding stale load failure (seq {seq} != {})", self.load_seq);
            return false;
        }
        self.loading = false;
        self.loading_state = None;
        self.load_error = Some(error);
        true
    }

    // ─────────────────────────────────────────────────────────
    // Derived Views
    // ─────────────────────────────────────────────────────────

    /// True when the query is non-blank and search results replace the
    /// active tab's service list.
    pub fn in_search_mode(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// The currently active tab, if the catalog has one.
    pub fn active_tab(&self) -> Option<&Tab> {
        let catalog = self.catalog.as_ref()?;
        let key = self.active_tab.as_deref()?;
        catalog.tab(key)
    }

    /// Index of the active tab in document order.
    pub fn active_tab_index(&self) -> Option<usize> {
        let catalog = self.catalog.as_ref()?;
        let key = self.active_tab.as_deref()?;
        catalog.tabs.iter().position(|t| t.key == key)
    }

    /// Search hits for the current query. Recomputed on each call, pure in
    /// `(catalog, query)`, so a reload can never leave stale hits behind.
    pub fn search_hits(&self) -> Vec<SearchHit<'_>> {
        match &self.catalog {
            Some(catalog) => search(catalog, &self.query),
            None => Vec::new(),
        }
    }

    /// Number of selectable rows in the current view.
    pub fn row_count(&self) -> usize {
        if self.in_search_mode() {
            self.search_hits().len()
        } else {
            self.active_tab().map(|t| t.services.len()).unwrap_or(0)
        }
    }

    /// The service under the cursor, in either view.
    pub fn selected_service(&self) -> Option<&Service> {
        if self.in_search_mode() {
            let hits = self.search_hits();
            hits.get(self.selected_row).map(|h| h.service)
        } else {
            self.active_tab()?.services.get(self.selected_row)
        }
    }

    /// The URL currently shown as copied, while the marker is fresh.
    pub fn copied_url(&self) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|m| !m.is_expired())
            .map(|m| m.url.as_str())
    }

    // ─────────────────────────────────────────────────────────
    // Selection & Navigation
    // ─────────────────────────────────────────────────────────

    /// Select next row (wraps)
    pub fn select_next_row(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected_row = (self.selected_row + 1) % count;
        }
    }

    /// Select previous row (wraps)
    pub fn select_prev_row(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected_row = if self.selected_row == 0 {
                count - 1
            } else {
                self.selected_row - 1
            };
        }
    }

    pub fn select_first_row(&mut self) {
        self.selected_row = 0;
    }

    pub fn select_last_row(&mut self) {
        self.selected_row = self.row_count().saturating_sub(1);
    }

    /// Keep the selection inside the current view after it changed size.
    pub fn clamp_selection(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= count {
            self.selected_row = count - 1;
        }
    }

    /// Activate the tab with this key, if it exists. Clears any search.
    pub fn select_tab(&mut self, key: &str) {
        let exists = self
            .catalog
            .as_ref()
            .map(|c| c.has_tab(key))
            .unwrap_or(false);
        if exists {
            self.active_tab = Some(key.to_string());
            self.query.clear();
            self.ui_mode = UiMode::Browse;
            self.selected_row = 0;
        }
    }

    /// Activate the tab at this display position, if it exists.
    pub fn select_tab_by_index(&mut self, index: usize) {
        let key = self
            .catalog
            .as_ref()
            .and_then(|c| c.tabs.get(index))
            .map(|t| t.key.clone());
        if let Some(key) = key {
            self.select_tab(&key);
        }
    }

    /// Cycle to the next tab in document order (wraps).
    pub fn next_tab(&mut self) {
        self.cycle_tab(1);
    }

    /// Cycle to the previous tab in document order (wraps).
    pub fn prev_tab(&mut self) {
        self.cycle_tab(-1);
    }

    fn cycle_tab(&mut self, step: isize) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        let len = catalog.tabs.len();
        if len == 0 {
            return;
        }
        let current = self.active_tab_index().unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len as isize) as usize;
        let key = catalog.tabs[next].key.clone();
        self.select_tab(&key);
    }

    // ─────────────────────────────────────────────────────────
    // Transients
    // ─────────────────────────────────────────────────────────

    /// Light up the copied indicator for this exact URL string.
    pub fn mark_copied(&mut self, url: String) {
        self.copied = Some(CopiedMarker::new(url));
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Advance animations and expire transient state. Called on Tick.
    pub fn tick(&mut self) {
        if let Some(loading) = &mut self.loading_state {
            loading.tick();
        }
        if self.copied.as_ref().is_some_and(|m| m.is_expired()) {
            self.copied = None;
        }
        self.toasts.retain(|t| !t.is_expired());
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(keys: &[&str]) -> Catalog {
        let tabs = keys
            .iter()
            .enumerate()
            .map(|(i, key)| Tab {
                name: key.to_uppercase(),
                key: key.to_string(),
                id: i as u64,
                main_url: None,
                icon: Default::default(),
                tooltip: Default::default(),
                services: vec![Service {
                    name: format!("svc-{key}"),
                    url: format!("http://{key}:80"),
                    description: String::new(),
                    icon: None,
                    alt_url: None,
                }],
            })
            .collect();
        Catalog { tabs }
    }

    #[test]
    fn test_first_load_selects_first_tab() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        assert!(state.loading);
        assert!(state.loading_state.is_some());

        assert!(state.apply_catalog(seq, catalog(&["a", "b"])));
        assert_eq!(state.active_tab.as_deref(), Some("a"));
        assert!(!state.loading);
        assert!(state.loading_state.is_none());
    }

    #[test]
    fn test_reload_keeps_active_tab_when_key_survives() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a", "b"]));
        state.select_tab("b");

        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a", "b", "c"]));
        assert_eq!(state.active_tab.as_deref(), Some("b"));
    }

    #[test]
    fn test_reload_falls_back_to_first_tab_when_key_vanished() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a", "b"]));
        state.select_tab("b");

        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a", "c"]));
        assert_eq!(state.active_tab.as_deref(), Some("a"));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = AppState::new();
        let stale = state.begin_load();
        let fresh = state.begin_load();
        assert_ne!(stale, fresh);

        assert!(state.apply_catalog(fresh, catalog(&["new"])));
        // The older load resolves afterwards and must not overwrite.
        assert!(!state.apply_catalog(stale, catalog(&["old"])));
        assert_eq!(state.active_tab.as_deref(), Some("new"));
        assert_eq!(state.catalog.as_ref().unwrap().tabs[0].key, "new");
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut state = AppState::new();
        let stale = state.begin_load();
        let fresh = state.begin_load();
        assert!(state.apply_catalog(fresh, catalog(&["a"])));
        assert!(!state.apply_load_failure(stale, "boom".into()));
        assert!(state.load_error.is_none());
    }

    #[test]
    fn test_load_failure_retains_previous_catalog() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a"]));

        let seq = state.begin_load();
        assert!(state.apply_load_failure(seq, "connection refused".into()));
        assert!(state.catalog.is_some());
        assert_eq!(state.load_error.as_deref(), Some("connection refused"));
        assert!(!state.loading);
    }

    #[test]
    fn test_reload_does_not_show_loading_screen_over_catalog() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a"]));

        state.begin_load();
        assert!(state.loading);
        assert!(state.loading_state.is_none());
    }

    #[test]
    fn test_search_mode_from_query() {
        let mut state = AppState::new();
        assert!(!state.in_search_mode());
        state.query = "   ".to_string();
        assert!(!state.in_search_mode());
        state.query = "plex".to_string();
        assert!(state.in_search_mode());
    }

    #[test]
    fn test_search_hits_without_catalog_is_empty() {
        let mut state = AppState::new();
        state.query = "anything".to_string();
        assert!(state.search_hits().is_empty());
        assert_eq!(state.row_count(), 0);
    }

    #[test]
    fn test_row_selection_wraps() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        let mut cat = catalog(&["a"]);
        cat.tabs[0].services.push(Service {
            name: "second".into(),
            url: "http://a:81".into(),
            description: String::new(),
            icon: None,
            alt_url: None,
        });
        state.apply_catalog(seq, cat);

        assert_eq!(state.selected_row, 0);
        state.select_next_row();
        assert_eq!(state.selected_row, 1);
        state.select_next_row();
        assert_eq!(state.selected_row, 0);
        state.select_prev_row();
        assert_eq!(state.selected_row, 1);
    }

    #[test]
    fn test_selection_clamped_after_reload() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        let mut cat = catalog(&["a"]);
        cat.tabs[0].services.push(Service {
            name: "second".into(),
            url: "http://a:81".into(),
            description: String::new(),
            icon: None,
            alt_url: None,
        });
        state.apply_catalog(seq, cat);
        state.select_last_row();
        assert_eq!(state.selected_row, 1);

        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a"]));
        assert_eq!(state.selected_row, 0);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a", "b", "c"]));

        state.next_tab();
        assert_eq!(state.active_tab.as_deref(), Some("b"));
        state.prev_tab();
        assert_eq!(state.active_tab.as_deref(), Some("a"));
        state.prev_tab();
        assert_eq!(state.active_tab.as_deref(), Some("c"));
    }

    #[test]
    fn test_select_tab_clears_search() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a", "b"]));
        state.query = "svc".to_string();
        state.ui_mode = UiMode::SearchInput;

        state.select_tab("b");
        assert_eq!(state.active_tab.as_deref(), Some("b"));
        assert!(state.query.is_empty());
        assert_eq!(state.ui_mode, UiMode::Browse);
    }

    #[test]
    fn test_select_unknown_tab_is_a_no_op() {
        let mut state = AppState::new();
        let seq = state.begin_load();
        state.apply_catalog(seq, catalog(&["a"]));
        state.select_tab("ghost");
        assert_eq!(state.active_tab.as_deref(), Some("a"));
    }

    #[test]
    fn test_copied_marker_is_keyed_by_exact_url() {
        let mut state = AppState::new();
        state.mark_copied("http://a:80".to_string());
        assert_eq!(state.copied_url(), Some("http://a:80"));
        assert_ne!(state.copied_url(), Some("http://a:80/"));
    }

    #[test]
    fn test_tick_expires_copied_marker() {
        let mut state = AppState::new();
        state.mark_copied("http://a:80".to_string());
        state.copied.as_mut().unwrap().at = Instant::now() - Duration::from_secs(5);
        assert_eq!(state.copied_url(), None);
        state.tick();
        assert!(state.copied.is_none());
    }

    #[test]
    fn test_tick_sweeps_expired_toasts() {
        let mut state = AppState::new();
        state.push_toast(Toast::info("fresh"));
        state.tick();
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_quit_lifecycle() {
        let mut state = AppState::new();
        assert!(!state.should_quit());
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_loading_state_cycles_messages() {
        let mut loading = LoadingState::new();
        let initial = loading.message.clone();
        for _ in 0..15 {
            loading.tick();
        }
        assert_ne!(loading.message, initial);
        assert_eq!(loading.animation_frame, 15);
    }
}
