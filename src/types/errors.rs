use std::fmt;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, PartialEq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
    /// The tab exists but does not host a render engine.
    NotOrdinary(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::NotOrdinary(id) => write!(f, "Tab has no render engine: {}", id),
        }
    }
}

impl std::error::Error for TabError {}

// === EngineError ===

/// Errors raised while creating a render engine instance.
#[derive(Debug, PartialEq)]
pub enum EngineError {
    /// The engine (or the widget hosting it) could not be constructed.
    Creation(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Creation(msg) => write!(f, "Render engine creation failed: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

// === BookmarkError ===

/// Reasons an address was not added to the bookmark set.
#[derive(Debug, PartialEq)]
pub enum BookmarkError {
    /// The address text was empty.
    EmptyUrl,
    /// A bookmark with the same URL already exists.
    DuplicateUrl(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::EmptyUrl => write!(f, "Cannot bookmark an empty address"),
            BookmarkError::DuplicateUrl(url) => write!(f, "Duplicate bookmark URL: {}", url),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === DownloadError ===

/// Errors related to download bookkeeping.
#[derive(Debug, PartialEq)]
pub enum DownloadError {
    /// Download with the given ID was not found.
    NotFound(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NotFound(id) => write!(f, "Download not found: {}", id),
        }
    }
}

impl std::error::Error for DownloadError {}

// === SettingsError ===

/// Errors raised while reading the settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// The file exists but could not be read.
    Read(String),
    /// The file is not valid settings JSON.
    Parse(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Read(msg) => write!(f, "Failed to read settings: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Malformed settings file: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

// === IpcError ===

/// Errors raised while handling messages from the browser chrome.
#[derive(Debug)]
pub enum IpcError {
    /// The message was not a well-formed command.
    Malformed(String),
    /// The command referred to a tab that could not be acted on.
    Tab(TabError),
    /// A new tab could not be created.
    Engine(EngineError),
}

impl fmt::Display for IpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcError::Malformed(msg) => write!(f, "Malformed IPC message: {}", msg),
            IpcError::Tab(e) => write!(f, "IPC tab error: {}", e),
            IpcError::Engine(e) => write!(f, "IPC engine error: {}", e),
        }
    }
}

impl std::error::Error for IpcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IpcError::Malformed(_) => None,
            IpcError::Tab(e) => Some(e),
            IpcError::Engine(e) => Some(e),
        }
    }
}

impl From<TabError> for IpcError {
    fn from(e: TabError) -> Self {
        IpcError::Tab(e)
    }
}

impl From<EngineError> for IpcError {
    fn from(e: EngineError) -> Self {
        IpcError::Engine(e)
    }
}
