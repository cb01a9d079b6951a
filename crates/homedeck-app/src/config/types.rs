//! Settings types for homedeck configuration

use serde::{Deserialize, Serialize};

/// Color theme for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme. Used by the runtime toggle.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Complete application settings from config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub ui: UiSettings,
    pub behavior: BehaviorSettings,
}

/// `[catalog]` section - where the catalog document lives
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog resource: an `http(s)://` URL or a filesystem path.
    pub source: String,

    /// Fetch timeout for remote sources, in seconds.
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: "catalog.json".to_string(),
            timeout_secs: 10,
        }
    }
}

/// `[ui]` section - presentation preferences
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Theme at startup. Toggled at runtime with `t`.
    pub theme: Theme,

    /// Whether the sidebar starts visible (wide layouts only).
    pub sidebar: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sidebar: true,
        }
    }
}

/// `[behavior]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Ring the terminal bell when a copy succeeds.
    pub bell_on_copy: bool,

    /// Allow the OSC 52 escape-sequence fallback when the system clipboard
    /// is unavailable (e.g. over SSH).
    pub osc52_fallback: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            bell_on_copy: false,
            osc52_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.catalog.source, "catalog.json");
        assert_eq!(settings.catalog.timeout_secs, 10);
        assert_eq!(settings.ui.theme, Theme::Dark);
        assert!(settings.ui.sidebar);
        assert!(!settings.behavior.bell_on_copy);
        assert!(settings.behavior.osc52_fallback);
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [catalog]
            source = "http://hydra.lan/catalog.json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.catalog.source, "http://hydra.lan/catalog.json");
        assert_eq!(settings.catalog.timeout_secs, 10);
        assert_eq!(settings.ui.theme, Theme::Dark);
    }

    #[test]
    fn test_theme_parses_lowercase() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            theme = "light"
            sidebar = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.ui.theme, Theme::Light);
        assert!(!settings.ui.sidebar);
    }
}
