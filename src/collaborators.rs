//! Contracts of the components the session manager drives but does not
//! implement: the per-tab render engine, the presentation shell and the
//! save-file chooser.
//!
//! The GUI build implements them on top of `wry`/`tao`/`rfd` (see `ui`), and
//! `headless` provides recording implementations for the console demo and
//! the tests.

use std::path::{Path, PathBuf};

use crate::types::download::DownloadRecord;
use crate::types::errors::EngineError;
use crate::types::list_view::ListView;
use crate::types::tab::{TabId, TabKind};

/// Commands accepted by one tab's render engine.
///
/// Dropping the engine releases it and abandons whatever it was loading.
pub trait RenderEngine {
    fn set_address(&mut self, url: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
}

/// Creates one render engine per ordinary tab.
pub trait EngineFactory {
    type Engine: RenderEngine;

    /// `tab` is the id the engine must attach to every notification it emits.
    fn create_engine(&mut self, tab: TabId) -> Result<Self::Engine, EngineError>;
}

/// Display surface driven by the session manager.
pub trait PresentationShell {
    fn add_tab(&mut self, tab: TabId, kind: TabKind, title: &str);
    fn remove_tab(&mut self, tab: TabId);
    fn set_tab_label(&mut self, tab: TabId, label: &str);
    fn set_active_tab(&mut self, tab: TabId);

    fn set_address_text(&mut self, text: &str);

    fn show_progress(&mut self);
    fn hide_progress(&mut self);
    fn set_progress(&mut self, percent: u8);

    fn open_list_view(&mut self, view: &ListView);
    fn close_list_view(&mut self);

    fn add_download_row(&mut self, record: &DownloadRecord);
    fn update_download_row(&mut self, record: &DownloadRecord);
}

/// Asks the user where to save a download.
pub trait FileChooser {
    /// Blocks until the user answers. `None` means the prompt was cancelled.
    fn choose_save_path(&mut self, proposed: &Path) -> Option<PathBuf>;
}
