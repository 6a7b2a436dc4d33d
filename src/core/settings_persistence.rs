//! Settings persistence
//!
//! Saves and loads [`EngineSettings`] to/from a JSON file. Only engine
//! configuration is persisted here; game state and statistics belong to the
//! host application.
//!
//! # File Location
//!
//! [`default_settings_path`] points into the user's configuration directory
//! and falls back to `engine_settings.json` in the working directory when the
//! platform exposes no such directory.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] return [`CoreError`]. Hosts that
//! prefer to keep going on a broken file use [`load_settings_or_default`],
//! which logs the failure and returns defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use super::error::CoreResult;
use super::settings::EngineSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "engine_settings.json";

/// Resolve the settings file path
///
/// E.g. `~/.config/tacticalrealms/engine_settings.json` on Linux.
pub fn default_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "TacticalRealms") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<EngineSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str::<EngineSettings>(&contents)?;
    info!("[SETTINGS] Loaded engine settings from {:?}", path);
    Ok(settings)
}

/// Read settings from `path`, falling back to defaults on any failure
pub fn load_settings_or_default(path: &Path) -> EngineSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return EngineSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            EngineSettings::default()
        }
    }
}

/// Write `settings` to `path` as pretty-printed JSON
///
/// Creates missing parent directories first.
pub fn save_settings(path: &Path, settings: &EngineSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved engine settings to {:?}", path);
    Ok(())
}
