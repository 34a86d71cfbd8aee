// PaperBrowser platform paths for Linux
// Config: ~/.config/paperbrowser

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for PaperBrowser on Linux.
/// Uses `$XDG_CONFIG_HOME/paperbrowser` if set, otherwise `~/.config/paperbrowser`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("paperbrowser"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("paperbrowser")
        }
    }
}
