//! Reading `settings.json`: defaults when absent, partial files filled in,
//! malformed files rejected without touching the current settings.

use std::path::PathBuf;

use paperbrowser::app::App;
use paperbrowser::services::settings_loader::{SettingsLoader, SETTINGS_FILE};
use paperbrowser::types::errors::SettingsError;
use paperbrowser::types::settings::BrowserSettings;
use tempfile::TempDir;

fn settings_path(dir: &TempDir) -> PathBuf {
    dir.path().join(SETTINGS_FILE)
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let mut loader = SettingsLoader::new(Some(settings_path(&dir)));

    let settings = loader.load().unwrap();
    assert_eq!(*settings, BrowserSettings::default());
    assert_eq!(settings.general.start_page, "http://www.google.com");
    assert_eq!(settings.general.blank_page, "about:blank");
    assert!(!settings_path(&dir).exists());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        settings_path(&dir),
        r#"{"general":{"start_page":"https://start.example"},"window":{"width":1600}}"#,
    )
    .unwrap();
    let mut loader = SettingsLoader::new(Some(settings_path(&dir)));

    let settings = loader.load().unwrap();
    assert_eq!(settings.general.start_page, "https://start.example");
    assert_eq!(settings.general.search_url, "https://www.google.com/search?q=");
    assert_eq!(settings.window.width, 1600);
    assert_eq!(settings.window.height, 800);
    assert_eq!(settings.downloads.default_directory, None);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(settings_path(&dir), "{ not json").unwrap();
    let mut loader = SettingsLoader::new(Some(settings_path(&dir)));

    assert!(matches!(loader.load(), Err(SettingsError::Parse(_))));
    assert_eq!(*loader.settings(), BrowserSettings::default());
}

#[test]
fn test_wrong_field_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(settings_path(&dir), r#"{"window":{"width":"wide"}}"#).unwrap();
    let mut loader = SettingsLoader::new(Some(settings_path(&dir)));

    assert!(matches!(loader.load(), Err(SettingsError::Parse(_))));
}

#[test]
fn test_directory_in_place_of_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(settings_path(&dir)).unwrap();
    let mut loader = SettingsLoader::new(Some(settings_path(&dir)));

    assert!(matches!(loader.load(), Err(SettingsError::Read(_))));
}

#[test]
fn test_app_startup_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(settings_path(&dir), "42").unwrap();
    let mut app = App::new(Some(settings_path(&dir)));

    assert_eq!(*app.startup(), BrowserSettings::default());
}

#[test]
fn test_app_startup_seeds_session_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        settings_path(&dir),
        r#"{"general":{"start_page":"https://home.example"}}"#,
    )
    .unwrap();
    let mut app = App::new(Some(settings_path(&dir)));
    app.startup();

    let mut session = app.build_session(
        paperbrowser::headless::RecordingEngineFactory::new(),
        paperbrowser::headless::RecordingShell::new(),
        paperbrowser::headless::ScriptedChooser::new(),
    );
    session.startup().unwrap();
    assert_eq!(session.address_text(), "https://home.example");
}
