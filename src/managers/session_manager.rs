//! Session Manager for PaperBrowser.
//!
//! Owns the open tabs, the address bar text, the shared load indicator, the
//! history log, the bookmark set and the download list. User actions come in
//! as method calls; engine notifications come in through
//! [`SessionManager::handle_engine_event`] tagged with the tab they belong to.
//! Every visible change is pushed to the presentation shell.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::collaborators::{EngineFactory, FileChooser, PresentationShell, RenderEngine};
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::download_manager::{DownloadManager, DownloadManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::tab_manager::TabManager;
use crate::services::address_resolver::resolve_address;
use crate::types::download::{DownloadAccepted, DownloadId, DownloadRecord, DownloadRequest};
use crate::types::errors::{DownloadError, EngineError, TabError};
use crate::types::events::EngineEvent;
use crate::types::list_view::{ListKind, ListView};
use crate::types::settings::{BrowserSettings, GeneralSettings};
use crate::types::tab::{Tab, TabEntry, TabId, TabKind, DOWNLOADS_TAB_TITLE, NEW_TAB_TITLE};

/// What `close_tab` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was removed and its engine released.
    Removed,
    /// It was the only ordinary tab; its address was reset to the blank page.
    Reset,
    /// The tab is not closable (downloads pseudo-tab).
    Ignored,
}

/// Mirror of the shared load indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    pub visible: bool,
    pub percent: u8,
}

pub struct SessionManager<F, S, C>
where
    F: EngineFactory,
{
    general: GeneralSettings,
    download_dir: Option<PathBuf>,
    factory: F,
    shell: S,
    chooser: C,
    tabs: TabManager<F::Engine>,
    address_text: String,
    progress: ProgressState,
    history: HistoryManager,
    bookmarks: BookmarkManager,
    downloads: DownloadManager,
    list_view: Option<ListView>,
}

impl<F, S, C> SessionManager<F, S, C>
where
    F: EngineFactory,
    S: PresentationShell,
    C: FileChooser,
{
    /// Creates a session with no tabs; call [`startup`](Self::startup) to
    /// open the default one.
    pub fn new(settings: &BrowserSettings, factory: F, shell: S, chooser: C) -> Self {
        Self {
            general: settings.general.clone(),
            download_dir: settings.downloads.default_directory.as_ref().map(PathBuf::from),
            factory,
            shell,
            chooser,
            tabs: TabManager::new(),
            address_text: String::new(),
            progress: ProgressState::default(),
            history: HistoryManager::new(),
            bookmarks: BookmarkManager::new(),
            downloads: DownloadManager::new(),
            list_view: None,
        }
    }

    /// Opens the default tab on the start page.
    pub fn startup(&mut self) -> Result<TabId, EngineError> {
        self.open_tab(None)
    }

    // ─── Tab lifecycle ───

    /// Creates a tab with its own engine, loads `address` (or the start page)
    /// and makes it active.
    pub fn open_tab(&mut self, address: Option<&str>) -> Result<TabId, EngineError> {
        let address = address.unwrap_or(self.general.start_page.as_str()).to_string();
        let id = TabId::new();

        let mut engine = self.factory.create_engine(id)?;
        engine.set_address(&address);

        self.tabs.push_ordinary(Tab::new(id, &address, engine));
        self.shell.add_tab(id, TabKind::Ordinary, NEW_TAB_TITLE);
        info!(tab = %id, address = %address, "opened tab");

        self.activate(id);
        Ok(id)
    }

    /// Closes a tab, keeping at least one ordinary tab alive.
    pub fn close_tab(&mut self, tab_id: TabId) -> Result<CloseOutcome, TabError> {
        let kind = self
            .tabs
            .kind_of(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        if !kind.is_closable() {
            debug!(tab = %tab_id, "ignoring close of the downloads tab");
            return Ok(CloseOutcome::Ignored);
        }

        if self.tabs.ordinary_count() > 1 {
            let was_active = self.tabs.active_id() == Some(tab_id);
            let removed = self.tabs.remove(tab_id)?;
            self.shell.remove_tab(tab_id);
            drop(removed);
            info!(tab = %tab_id, "closed tab");

            if was_active {
                if let Some(next) = self.tabs.active_id() {
                    self.activate(next);
                }
            }
            return Ok(CloseOutcome::Removed);
        }

        let blank = self.general.blank_page.clone();
        let tab = self
            .tabs
            .ordinary_mut(tab_id)
            .ok_or_else(|| TabError::NotOrdinary(tab_id.to_string()))?;
        tab.engine_mut().set_address(&blank);
        tab.address = blank.clone();
        info!(tab = %tab_id, "last tab kept open, reset to {}", blank);

        if self.tabs.active_id() == Some(tab_id) {
            self.set_address_text(&blank);
        }
        Ok(CloseOutcome::Reset)
    }

    pub fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        if self.tabs.get(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.activate(tab_id);
        Ok(())
    }

    fn activate(&mut self, tab_id: TabId) {
        if self.tabs.switch_tab(tab_id).is_err() {
            return;
        }
        self.shell.set_active_tab(tab_id);
        if let Some(address) = self.tabs.ordinary(tab_id).map(|t| t.address.clone()) {
            self.set_address_text(&address);
        }
    }

    // ─── Navigation ───

    /// Resolves `raw_input` and sends it to the active tab's engine.
    ///
    /// Returns the resolved address, or `None` when the active tab has no
    /// engine (the downloads tab is shown).
    pub fn navigate(&mut self, raw_input: &str) -> Option<String> {
        let target = resolve_address(raw_input, &self.general.search_url);
        match self.tabs.current_tab_mut() {
            Some(tab) => {
                debug!(tab = %tab.id, input = raw_input, target = %target, "navigate");
                tab.engine_mut().set_address(&target);
                Some(target)
            }
            None => {
                warn!(input = raw_input, "no ordinary tab active, navigation dropped");
                None
            }
        }
    }

    /// Navigates the active tab to whatever the address field currently holds.
    pub fn submit_address(&mut self) -> Option<String> {
        let text = self.address_text.clone();
        self.navigate(&text)
    }

    pub fn go_back(&mut self) {
        if let Some(tab) = self.tabs.current_tab_mut() {
            tab.engine_mut().go_back();
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(tab) = self.tabs.current_tab_mut() {
            tab.engine_mut().go_forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(tab) = self.tabs.current_tab_mut() {
            tab.engine_mut().reload();
        }
    }

    /// Records text typed into the address field without navigating.
    pub fn address_edited(&mut self, text: &str) {
        self.address_text = text.to_string();
    }

    fn set_address_text(&mut self, text: &str) {
        self.address_text = text.to_string();
        self.shell.set_address_text(text);
    }

    // ─── Engine notifications ───

    /// Applies a notification emitted by the engine of `tab_id`.
    ///
    /// Page notifications for tabs that were closed in the meantime are
    /// dropped; download notifications are handled regardless of the tab,
    /// since downloads outlive the tab that started them.
    pub fn handle_engine_event(&mut self, tab_id: TabId, event: EngineEvent) {
        match event {
            EngineEvent::AddressChanged(url) => self.on_address_changed(tab_id, &url),
            EngineEvent::TitleChanged(title) => self.on_title_changed(tab_id, &title),
            EngineEvent::LoadStarted => self.on_load_started(tab_id),
            EngineEvent::LoadProgress(value) => self.on_load_progress(tab_id, value),
            EngineEvent::LoadFinished { ok } => self.on_load_finished(tab_id, ok),
            EngineEvent::DownloadProgress {
                download,
                received,
                total,
            } => {
                if let Err(e) = self.on_download_progress(download, received, total) {
                    warn!("{}", e);
                }
            }
            EngineEvent::DownloadFinished { download } => {
                if let Err(e) = self.on_download_finished(download) {
                    warn!("{}", e);
                }
            }
        }
    }

    fn on_address_changed(&mut self, tab_id: TabId, url: &str) {
        let Some(tab) = self.tabs.ordinary_mut(tab_id) else {
            debug!(tab = %tab_id, "address change from a closed tab");
            return;
        };
        tab.address = url.to_string();

        if self.tabs.active_id() == Some(tab_id) {
            self.set_address_text(url);
        }
        if self.history.record_visit(url) {
            debug!(url, "history entry added");
        }
    }

    fn on_title_changed(&mut self, tab_id: TabId, title: &str) {
        let Some(tab) = self.tabs.ordinary_mut(tab_id) else {
            return;
        };
        tab.title = title.to_string();
        self.shell.set_tab_label(tab_id, title);
    }

    fn on_load_started(&mut self, tab_id: TabId) {
        let Some(tab) = self.tabs.ordinary_mut(tab_id) else {
            return;
        };
        tab.load_progress = Some(0);

        if self.tabs.active_id() == Some(tab_id) {
            self.progress = ProgressState {
                visible: true,
                percent: 0,
            };
            self.shell.show_progress();
            self.shell.set_progress(0);
        }
    }

    fn on_load_progress(&mut self, tab_id: TabId, value: u8) {
        let value = value.min(100);
        let Some(tab) = self.tabs.ordinary_mut(tab_id) else {
            return;
        };
        tab.load_progress = Some(value);

        if self.tabs.active_id() == Some(tab_id) {
            self.progress.percent = value;
            self.shell.set_progress(value);
        }
    }

    fn on_load_finished(&mut self, tab_id: TabId, ok: bool) {
        let Some(tab) = self.tabs.ordinary_mut(tab_id) else {
            return;
        };
        tab.load_progress = None;
        debug!(tab = %tab_id, ok, "load finished");

        if self.tabs.active_id() == Some(tab_id) {
            self.progress.visible = false;
            self.shell.hide_progress();
        }
    }

    // ─── Downloads ───

    /// Prompts for a destination. On confirmation the download is recorded,
    /// the downloads tab is created if needed and the destination is returned
    /// so the engine can accept the download. `None` rejects it.
    pub fn on_download_requested(&mut self, request: DownloadRequest) -> Option<DownloadAccepted> {
        let proposed = self.proposed_destination(&request.proposed_path);
        let Some(destination) = self.chooser.choose_save_path(&proposed) else {
            info!(url = %request.source_url, "download cancelled");
            return None;
        };

        let id = self.downloads.start_download(&request, destination.clone());
        self.ensure_downloads_tab();
        if let Some(record) = self.downloads.get_download(id) {
            self.shell.add_download_row(record);
        }
        info!(download = %id, destination = %destination.display(), "download accepted");

        Some(DownloadAccepted { id, destination })
    }

    fn proposed_destination(&self, proposed: &Path) -> PathBuf {
        match &self.download_dir {
            Some(dir) if proposed.is_relative() => dir.join(proposed),
            _ => proposed.to_path_buf(),
        }
    }

    fn ensure_downloads_tab(&mut self) {
        let (id, created) = self.tabs.ensure_downloads();
        if created {
            self.shell.add_tab(id, TabKind::Downloads, DOWNLOADS_TAB_TITLE);
            info!(tab = %id, "downloads tab created");
        }
    }

    /// Updates the displayed progress. An unknown total (`<= 0`) leaves the
    /// display as it was.
    pub fn on_download_progress(
        &mut self,
        id: DownloadId,
        received: u64,
        total: i64,
    ) -> Result<(), DownloadError> {
        if self.downloads.update_progress(id, received, total)?.is_some() {
            if let Some(record) = self.downloads.get_download(id) {
                self.shell.update_download_row(record);
            }
        }
        Ok(())
    }

    /// Marks a download complete: 100% and a completion marker on its label,
    /// whatever the last reported byte count was.
    pub fn on_download_finished(&mut self, id: DownloadId) -> Result<(), DownloadError> {
        let record = self.downloads.mark_finished(id)?;
        self.shell.update_download_row(record);
        info!(download = %id, "download finished");
        Ok(())
    }

    /// Shows the downloads tab. Returns `false` if no download was ever
    /// accepted.
    pub fn open_downloads_view(&mut self) -> bool {
        match self.tabs.downloads_id() {
            Some(id) => {
                self.activate(id);
                true
            }
            None => false,
        }
    }

    pub fn download_by_destination(&self, destination: &Path) -> Option<DownloadId> {
        self.downloads.find_by_destination(destination)
    }

    // ─── History & bookmarks ───

    pub fn show_history(&mut self) {
        let view = ListView::snapshot(ListKind::History, self.history.list_history());
        self.open_list(view);
    }

    pub fn show_bookmarks(&mut self) {
        let view = ListView::snapshot(ListKind::Bookmarks, self.bookmarks.list_bookmarks());
        self.open_list(view);
    }

    fn open_list(&mut self, view: ListView) {
        self.shell.open_list_view(&view);
        self.list_view = Some(view);
    }

    /// Handles a double-selected list entry: closes the view, puts the entry
    /// in the address field and navigates the active tab to it.
    pub fn activate_list_entry(&mut self, entry: &str) -> Option<String> {
        if self.list_view.take().is_none() {
            warn!(entry, "list entry activated with no list open");
            return None;
        }
        self.shell.close_list_view();
        self.set_address_text(entry);
        self.navigate(entry)
    }

    pub fn dismiss_list_view(&mut self) {
        if self.list_view.take().is_some() {
            self.shell.close_list_view();
        }
    }

    /// Bookmarks the address field's text. Empty or already bookmarked text
    /// is a silent no-op.
    pub fn add_bookmark(&mut self) -> bool {
        match self.bookmarks.add_bookmark(&self.address_text) {
            Ok(()) => {
                info!(url = %self.address_text, "bookmark added");
                true
            }
            Err(e) => {
                debug!("{}", e);
                false
            }
        }
    }

    // ─── Accessors ───

    pub fn history(&self) -> &[String] {
        self.history.list_history()
    }

    pub fn bookmarks(&self) -> &[String] {
        self.bookmarks.list_bookmarks()
    }

    pub fn downloads(&self) -> &[DownloadRecord] {
        self.downloads.list_downloads()
    }

    pub fn download(&self, id: DownloadId) -> Option<&DownloadRecord> {
        self.downloads.get_download(id)
    }

    pub fn address_text(&self) -> &str {
        &self.address_text
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.tabs.active_id()
    }

    /// The active tab if it hosts an engine.
    pub fn current_tab(&self) -> Option<&Tab<F::Engine>> {
        self.tabs.current_tab()
    }

    pub fn tab(&self, tab_id: TabId) -> Option<&TabEntry<F::Engine>> {
        self.tabs.get(tab_id)
    }

    pub fn tab_order(&self) -> Vec<TabId> {
        self.tabs.tab_order()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.tab_count()
    }

    pub fn ordinary_tab_count(&self) -> usize {
        self.tabs.ordinary_count()
    }

    pub fn downloads_tab_id(&self) -> Option<TabId> {
        self.tabs.downloads_id()
    }

    pub fn list_view(&self) -> Option<&ListView> {
        self.list_view.as_ref()
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn chooser_mut(&mut self) -> &mut C {
        &mut self.chooser
    }
}
