use super::download::DownloadId;

/// Notifications a render engine emits for the tab it belongs to.
///
/// Engines tag every event with their tab's id when handing it to the session,
/// and events of one tab are handled in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AddressChanged(String),
    TitleChanged(String),
    LoadStarted,
    LoadProgress(u8),
    /// `ok` is carried along but not surfaced; a failed load hides the
    /// indicator exactly like a successful one.
    LoadFinished { ok: bool },
    DownloadProgress {
        download: DownloadId,
        received: u64,
        total: i64,
    },
    DownloadFinished { download: DownloadId },
}
