use serde::{Deserialize, Serialize};

/// Top-level browser settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
    pub downloads: DownloadSettings,
}

/// Navigation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Address loaded by new tabs opened without a target.
    pub start_page: String,
    /// Address the last tab is reset to instead of being closed.
    pub blank_page: String,
    /// Prefix for search queries; the `+`-joined words are appended.
    pub search_url: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            start_page: "http://www.google.com".to_string(),
            blank_page: "about:blank".to_string(),
            search_url: "https://www.google.com/search?q=".to_string(),
        }
    }
}

/// Main window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "PaperBrowser".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DownloadSettings {
    /// Directory joined onto bare file names proposed by the engine.
    pub default_directory: Option<String>,
}
