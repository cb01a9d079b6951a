//! Configuration file parsing for homedeck
//!
//! Supports `~/.config/homedeck/config.toml` with `[catalog]`, `[ui]`, and
//! `[behavior]` sections. Everything has a default; the file is optional.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, load_settings, load_settings_from, save_settings_to};
pub use types::{BehaviorSettings, CatalogSettings, Settings, Theme, UiSettings};
