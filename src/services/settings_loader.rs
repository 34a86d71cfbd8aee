//! Read-only access to `settings.json`.
//!
//! The file is optional and may be partial: every section and field missing
//! from it keeps its default. Nothing is written back.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

pub const SETTINGS_FILE: &str = "settings.json";

pub struct SettingsLoader {
    path: PathBuf,
    settings: BrowserSettings,
}

impl SettingsLoader {
    /// `path` overrides `<config dir>/settings.json`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| platform::get_config_dir().join(SETTINGS_FILE)),
            settings: BrowserSettings::default(),
        }
    }

    /// Reads the file into the current settings. A missing file means
    /// defaults; on error the current settings are left as they were.
    pub fn load(&mut self) -> Result<&BrowserSettings, SettingsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                self.settings = BrowserSettings::default();
                return Ok(&self.settings);
            }
            Err(e) => return Err(SettingsError::Read(e.to_string())),
        };

        self.settings =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        Ok(&self.settings)
    }

    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
