//! Settings parser for ~/.config/homedeck/config.toml

use std::path::{Path, PathBuf};

use homedeck_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const HOMEDECK_DIR: &str = "homedeck";

/// Path of the user-level config file, if a config directory exists.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(HOMEDECK_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user config file.
///
/// A missing file yields defaults silently; a malformed file yields
/// defaults with a warning, so a typo in the config never prevents startup.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// Load settings from a specific path (also used by tests).
pub fn load_settings_from(path: &Path) -> Settings {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Settings::default();
        }
        Err(e) => {
            warn!("Failed to read {}: {e}", path.display());
            return Settings::default();
        }
    };

    match toml::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Malformed config {}: {e}", path.display());
            Settings::default()
        }
    }
}

/// Write settings back to a specific path, creating parent directories.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("serialize settings: {e}")))?;
    std::fs::write(path, raw)?;
    Ok(())
}
