//! App Core for PaperBrowser.
//!
//! Loads the settings and assembles a session around whichever engine,
//! shell and file chooser the front end provides.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::collaborators::{EngineFactory, FileChooser, PresentationShell};
use crate::managers::session_manager::SessionManager;
use crate::services::settings_loader::SettingsLoader;
use crate::types::settings::BrowserSettings;

pub struct App {
    pub settings: SettingsLoader,
}

impl App {
    /// `config_path` overrides the platform settings location.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            settings: SettingsLoader::new(config_path),
        }
    }

    /// Loads settings from disk. A missing file yields defaults; an unreadable
    /// or malformed one is logged and defaults are used as well.
    pub fn startup(&mut self) -> &BrowserSettings {
        let loaded = self.settings.load().map(|_| ());
        match loaded {
            Ok(()) => info!(path = %self.settings.path().display(), "settings loaded"),
            Err(e) => warn!("{}; using default settings", e),
        }
        self.settings.settings()
    }

    pub fn settings(&self) -> &BrowserSettings {
        self.settings.settings()
    }

    /// Builds a session from the current settings. No tab is open yet.
    pub fn build_session<F, S, C>(
        &self,
        factory: F,
        shell: S,
        chooser: C,
    ) -> SessionManager<F, S, C>
    where
        F: EngineFactory,
        S: PresentationShell,
        C: FileChooser,
    {
        SessionManager::new(self.settings(), factory, shell, chooser)
    }
}
