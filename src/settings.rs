//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file so engine preferences
//! survive between runs.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/pawnking/settings.json` on Linux. Falls back to `settings.json` in
//! the working directory when no config directory can be resolved.
//!
//! # Error Handling
//!
//! Loading never fails: a missing file, unreadable file or bad JSON falls back
//! to defaults with a log line. Saving reports its error to the caller.

use crate::error::{AppError, AppResult};
use directories::ProjectDirs;
use pawnking_engine::{Color, EngineConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// `ProjectDirs` identity: qualifier, organization, application
const PROJECT_ID: (&str, &str, &str) = ("org", "pawnking", "Pawnking");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineConfig,
    /// Side the engine plays in `play`; `None` lets it play both sides
    pub ai_color: Option<Color>,
    /// Print the board after each move
    pub show_board: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            engine: EngineConfig::default(),
            ai_color: Some(Color::Black),
            show_board: true,
        }
    }
}

/// Resolve the path of `settings.json`
pub fn settings_path() -> PathBuf {
    let (qualifier, organization, application) = PROJECT_ID;
    match ProjectDirs::from(qualifier, organization, application) {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Load settings from `path`, falling back to defaults on any failure
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }

    match try_load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Load settings from `path`, reporting read and parse errors
pub fn try_load_settings(path: &Path) -> AppResult<Settings> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = serde_json::from_str(&contents)?;
    settings.engine.validate()?;
    Ok(settings)
}

/// Write `settings` as pretty JSON, creating the parent directory if needed
pub fn save_settings_to(path: &Path, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| AppError::Settings {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(|source| AppError::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
