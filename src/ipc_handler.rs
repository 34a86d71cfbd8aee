//! Command handler for messages posted by the browser chrome.
//!
//! The toolbar, tab strip and list overlay post JSON messages of the form
//! `{"cmd": "...", ...}` through the webview IPC channel. `parse_command`
//! turns them into [`ChromeCommand`]s and `dispatch` applies one to the
//! session, so the whole path can be tested without a window.

use serde::Deserialize;
use tracing::debug;

use crate::collaborators::{EngineFactory, FileChooser, PresentationShell};
use crate::managers::session_manager::SessionManager;
use crate::types::errors::IpcError;
use crate::types::tab::TabId;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ChromeCommand {
    /// Enter pressed in the address field.
    Navigate { input: String },
    /// Address field edited without submitting.
    AddressEdited { text: String },
    NewTab,
    CloseTab { id: TabId },
    SwitchTab { id: TabId },
    Back,
    Forward,
    Reload,
    AddBookmark,
    ShowHistory,
    ShowBookmarks,
    ShowDownloads,
    /// Double-click on an entry of the open history/bookmark list.
    PickListEntry { entry: String },
    DismissList,
}

/// Parse a raw IPC message body.
pub fn parse_command(message: &str) -> Result<ChromeCommand, IpcError> {
    serde_json::from_str(message).map_err(|e| IpcError::Malformed(e.to_string()))
}

/// Apply a chrome command to the session.
pub fn dispatch<F, S, C>(
    session: &mut SessionManager<F, S, C>,
    command: ChromeCommand,
) -> Result<(), IpcError>
where
    F: EngineFactory,
    S: PresentationShell,
    C: FileChooser,
{
    debug!(?command, "chrome command");
    match command {
        ChromeCommand::Navigate { input } => {
            session.address_edited(&input);
            session.submit_address();
        }
        ChromeCommand::AddressEdited { text } => session.address_edited(&text),
        ChromeCommand::NewTab => {
            session.open_tab(None)?;
        }
        ChromeCommand::CloseTab { id } => {
            session.close_tab(id)?;
        }
        ChromeCommand::SwitchTab { id } => session.switch_tab(id)?,
        ChromeCommand::Back => session.go_back(),
        ChromeCommand::Forward => session.go_forward(),
        ChromeCommand::Reload => session.reload(),
        ChromeCommand::AddBookmark => {
            session.add_bookmark();
        }
        ChromeCommand::ShowHistory => session.show_history(),
        ChromeCommand::ShowBookmarks => session.show_bookmarks(),
        ChromeCommand::ShowDownloads => {
            session.open_downloads_view();
        }
        ChromeCommand::PickListEntry { entry } => {
            session.activate_list_entry(&entry);
        }
        ChromeCommand::DismissList => session.dismiss_list_view(),
    }
    Ok(())
}
