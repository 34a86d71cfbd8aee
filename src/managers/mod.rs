// PaperBrowser state managers
// Managers hold the in-memory state of tabs, history, bookmarks and downloads,
// plus the session that ties them together.

pub mod bookmark_manager;
pub mod download_manager;
pub mod history_manager;
pub mod session_manager;
pub mod tab_manager;
