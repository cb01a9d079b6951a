//! Message types for the application (TEA pattern)

use homedeck_core::Catalog;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (animations, toast/marker expiry)
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Catalog Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Trigger a (re)load of the catalog resource. Doubles as the retry
    /// action from the error view.
    ReloadCatalog,

    /// A load completed successfully. `seq` identifies which issued load
    /// this completion belongs to; stale completions are discarded.
    CatalogLoaded { seq: u64, catalog: Catalog },

    /// A load failed. Same staleness rules as `CatalogLoaded`.
    CatalogLoadFailed { seq: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Tab Navigation
    // ─────────────────────────────────────────────────────────
    /// Select a tab by its stable key
    SelectTab { key: String },
    /// Select a tab by display position (keys 1-9)
    SelectTabByIndex(usize),
    /// Cycle to the next tab
    NextTab,
    /// Cycle to the previous tab
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Row Selection
    // ─────────────────────────────────────────────────────────
    /// Move the selection down one row
    SelectNextRow,
    /// Move the selection up one row
    SelectPrevRow,
    /// Jump to the first row
    SelectFirstRow,
    /// Jump to the last row
    SelectLastRow,

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode (show the query prompt)
    StartSearch,
    /// Leave search input mode, keeping the query and its results
    CancelSearch,
    /// Clear the query completely and return to the active tab
    ClearSearch,
    /// Append a character to the query
    SearchChar(char),
    /// Remove the last character of the query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────
    // View Toggles
    // ─────────────────────────────────────────────────────────
    /// Show/hide the sidebar
    ToggleSidebar,
    /// Switch between the dark and light theme
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Clipboard / Open
    // ─────────────────────────────────────────────────────────
    /// Open the selected service's primary URL
    OpenSelected,
    /// Copy the selected service's URL; `alternate` picks `alt_url`
    CopySelected { alternate: bool },
    /// Open a specific URL in the system browser (fire-and-forget)
    OpenUrl { url: String },
    /// Copy a specific URL to the clipboard
    CopyUrl { url: String },
    /// Clipboard write succeeded
    CopyCompleted { url: String },
    /// Clipboard write failed through every fallback
    CopyFailed { url: String, error: String },
}
