//! Catalog document model
//!
//! The catalog is an externally editable JSON document describing servers
//! ("tabs") and the services running on them. It is parsed wholesale: a load
//! either produces a complete [`Catalog`] or fails, so the UI never observes
//! a half-updated document.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One addressable endpoint hosted on a tab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Service {
    /// Display label.
    pub name: String,

    /// Primary address. Opaque to homedeck; never parsed or validated.
    pub url: String,

    /// Free-text description shown next to the name.
    pub description: String,

    /// Optional display glyph. The render layer substitutes a generic
    /// fallback when absent.
    #[serde(default)]
    pub icon: Option<String>,

    /// Optional secondary address (e.g. a LAN address next to a public one).
    #[serde(default)]
    pub alt_url: Option<String>,
}

/// Display category for a tab, a closed set with a generic fallback.
///
/// Unknown values in the document deserialize to [`TabIcon::Generic`] rather
/// than failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabIcon {
    Server,
    Desktop,
    Laptop,
    Router,
    Nas,
    Cloud,
    Pi,
    #[default]
    Generic,
}

impl<'de> Deserialize<'de> for TabIcon {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(TabIcon::from_tag(&tag))
    }
}

impl TabIcon {
    /// Resolve a document tag; anything outside the closed set is
    /// [`TabIcon::Generic`].
    pub fn from_tag(tag: &str) -> TabIcon {
        match tag {
            "server" => TabIcon::Server,
            "desktop" => TabIcon::Desktop,
            "laptop" => TabIcon::Laptop,
            "router" => TabIcon::Router,
            "nas" => TabIcon::Nas,
            "cloud" => TabIcon::Cloud,
            "pi" => TabIcon::Pi,
            _ => TabIcon::Generic,
        }
    }

    /// Terminal glyph for this category.
    pub fn glyph(&self) -> &'static str {
        match self {
            TabIcon::Server => "🖥",
            TabIcon::Desktop => "🖳",
            TabIcon::Laptop => "💻",
            TabIcon::Router => "📡",
            TabIcon::Nas => "💾",
            TabIcon::Cloud => "☁",
            TabIcon::Pi => "🥧",
            TabIcon::Generic => "▪",
        }
    }

    /// ASCII fallback for terminals without wide-glyph fonts.
    pub fn ascii(&self) -> &'static str {
        match self {
            TabIcon::Server => "[srv]",
            TabIcon::Desktop => "[pc]",
            TabIcon::Laptop => "[lap]",
            TabIcon::Router => "[net]",
            TabIcon::Nas => "[nas]",
            TabIcon::Cloud => "[cld]",
            TabIcon::Pi => "[pi]",
            TabIcon::Generic => "[host]",
        }
    }
}

/// Descriptive metadata shown in the details panel for a tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Tooltip {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub specs: Option<String>,
}

impl Tooltip {
    /// True when no field carries any text.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.specs.is_none()
    }
}

/// One logical host/group of services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tab {
    /// Display name.
    pub name: String,

    /// Stable unique identifier used for selection and equality.
    pub key: String,

    /// Display-only ordinal from the document; not used for selection.
    #[serde(default)]
    pub id: u64,

    /// Address of the host itself (e.g. its admin page).
    #[serde(rename = "mainUrl", default)]
    pub main_url: Option<String>,

    /// Display category.
    #[serde(default)]
    pub icon: TabIcon,

    /// Descriptive metadata.
    #[serde(default)]
    pub tooltip: Tooltip,

    /// Services in display order. Document order is significant.
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Root catalog document: an ordered sequence of tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Catalog {
    pub tabs: Vec<Tab>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// Syntactically invalid JSON is a [`Error::CatalogLoad`] (the resource
    /// could not be parsed); JSON that parses but does not expose a `tabs`
    /// array, or whose tabs are malformed or carry duplicate keys, is a
    /// [`Error::CatalogShape`].
    pub fn from_json(raw: &str) -> Result<Catalog> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| Error::catalog_load(format!("invalid JSON: {e}")))?;

        let Some(tabs) = value.get("tabs") else {
            return Err(Error::catalog_shape("document has no `tabs` field"));
        };
        if !tabs.is_array() {
            return Err(Error::catalog_shape("`tabs` is not an array"));
        }

        let catalog: Catalog = serde_json::from_value(value)
            .map_err(|e| Error::catalog_shape(format!("malformed tab entry: {e}")))?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Structural invariants beyond what serde enforces.
    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for tab in &self.tabs {
            if tab.key.is_empty() {
                return Err(Error::catalog_shape(format!(
                    "tab {:?} has an empty key",
                    tab.name
                )));
            }
            if !seen.insert(tab.key.as_str()) {
                return Err(Error::catalog_shape(format!(
                    "duplicate tab key {:?}",
                    tab.key
                )));
            }
        }
        Ok(())
    }

    /// Look up a tab by its key.
    pub fn tab(&self, key: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.key == key)
    }

    /// Key of the first tab in document order, if any.
    pub fn first_tab_key(&self) -> Option<&str> {
        self.tabs.first().map(|t| t.key.as_str())
    }

    /// True when a tab with this key exists.
    pub fn has_tab(&self, key: &str) -> bool {
        self.tab(key).is_some()
    }

    /// Total number of services across all tabs.
    pub fn service_count(&self) -> usize {
        self.tabs.iter().map(|t| t.services.len()).sum()
    }
}
