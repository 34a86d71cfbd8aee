//! Window-less implementations of the collaborator traits.
//!
//! They record what the session asked of them instead of drawing anything,
//! which is what the console demo prints and what the tests assert on.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collaborators::{EngineFactory, FileChooser, PresentationShell, RenderEngine};
use crate::managers::session_manager::ProgressState;
use crate::types::download::DownloadRecord;
use crate::types::errors::EngineError;
use crate::types::list_view::ListView;
use crate::types::tab::{TabId, TabKind};

/// A command received by a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    SetAddress(String),
    GoBack,
    GoForward,
    Reload,
}

/// Engine that only remembers the commands it was given.
#[derive(Debug)]
pub struct RecordingEngine {
    tab: TabId,
    commands: Vec<EngineCommand>,
}

impl RecordingEngine {
    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    /// The last address this engine was told to load.
    pub fn last_address(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            EngineCommand::SetAddress(url) => Some(url.as_str()),
            _ => None,
        })
    }
}

impl RenderEngine for RecordingEngine {
    fn set_address(&mut self, url: &str) {
        debug!(tab = %self.tab, url, "engine: set address");
        self.commands.push(EngineCommand::SetAddress(url.to_string()));
    }

    fn go_back(&mut self) {
        self.commands.push(EngineCommand::GoBack);
    }

    fn go_forward(&mut self) {
        self.commands.push(EngineCommand::GoForward);
    }

    fn reload(&mut self) {
        self.commands.push(EngineCommand::Reload);
    }
}

#[derive(Debug, Default)]
pub struct RecordingEngineFactory {
    created: usize,
    fail_next: bool,
}

impl RecordingEngineFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of engines created so far.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Makes the next `create_engine` call fail.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl EngineFactory for RecordingEngineFactory {
    type Engine = RecordingEngine;

    fn create_engine(&mut self, tab: TabId) -> Result<RecordingEngine, EngineError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(EngineError::Creation("engine creation refused".to_string()));
        }
        self.created += 1;
        Ok(RecordingEngine {
            tab,
            commands: Vec::new(),
        })
    }
}

/// A tab as the shell last displayed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellTab {
    pub id: TabId,
    pub kind: TabKind,
    pub label: String,
}

/// Shell that keeps the state a real window would be showing.
#[derive(Debug, Default)]
pub struct RecordingShell {
    tabs: Vec<ShellTab>,
    active: Option<TabId>,
    address_text: String,
    progress: ProgressState,
    list_view: Option<ListView>,
    download_rows: Vec<DownloadRecord>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[ShellTab] {
        &self.tabs
    }

    pub fn label_of(&self, tab: TabId) -> Option<&str> {
        self.tabs
            .iter()
            .find(|t| t.id == tab)
            .map(|t| t.label.as_str())
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn address_text(&self) -> &str {
        &self.address_text
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn list_view(&self) -> Option<&ListView> {
        self.list_view.as_ref()
    }

    pub fn download_rows(&self) -> &[DownloadRecord] {
        &self.download_rows
    }
}

impl PresentationShell for RecordingShell {
    fn add_tab(&mut self, tab: TabId, kind: TabKind, title: &str) {
        self.tabs.push(ShellTab {
            id: tab,
            kind,
            label: title.to_string(),
        });
    }

    fn remove_tab(&mut self, tab: TabId) {
        self.tabs.retain(|t| t.id != tab);
    }

    fn set_tab_label(&mut self, tab: TabId, label: &str) {
        if let Some(t) = self.tabs.iter_mut().find(|t| t.id == tab) {
            t.label = label.to_string();
        }
    }

    fn set_active_tab(&mut self, tab: TabId) {
        self.active = Some(tab);
    }

    fn set_address_text(&mut self, text: &str) {
        self.address_text = text.to_string();
    }

    fn show_progress(&mut self) {
        self.progress.visible = true;
    }

    fn hide_progress(&mut self) {
        self.progress.visible = false;
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress.percent = percent;
    }

    fn open_list_view(&mut self, view: &ListView) {
        self.list_view = Some(view.clone());
    }

    fn close_list_view(&mut self) {
        self.list_view = None;
    }

    fn add_download_row(&mut self, record: &DownloadRecord) {
        self.download_rows.push(record.clone());
    }

    fn update_download_row(&mut self, record: &DownloadRecord) {
        if let Some(row) = self.download_rows.iter_mut().find(|r| r.id == record.id) {
            *row = record.clone();
        }
    }
}

/// File chooser answering from a script. With nothing scripted it accepts
/// the proposed path as-is.
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    answers: VecDeque<Option<PathBuf>>,
    prompts: Vec<PathBuf>,
}

impl ScriptedChooser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_next(&mut self, path: impl Into<PathBuf>) {
        self.answers.push_back(Some(path.into()));
    }

    pub fn cancel_next(&mut self) {
        self.answers.push_back(None);
    }

    /// Paths proposed to the chooser, in prompt order.
    pub fn prompts(&self) -> &[PathBuf] {
        &self.prompts
    }
}

impl FileChooser for ScriptedChooser {
    fn choose_save_path(&mut self, proposed: &Path) -> Option<PathBuf> {
        self.prompts.push(proposed.to_path_buf());
        self.answers
            .pop_front()
            .unwrap_or_else(|| Some(proposed.to_path_buf()))
    }
}
