use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suffix appended to a download's label once the engine reports completion.
pub const COMPLETED_MARKER: &str = " (Completed)";

/// Identity of an accepted download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadId(Uuid);

impl DownloadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DownloadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DownloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A download the engine wants to start, before the user picked a destination.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub source_url: String,
    pub proposed_path: PathBuf,
    pub size_hint: Option<u64>,
}

/// Result of a confirmed download prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadAccepted {
    pub id: DownloadId,
    pub destination: PathBuf,
}

/// Represents an accepted file download with its progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadRecord {
    pub id: DownloadId,
    pub source_url: String,
    pub destination: PathBuf,
    pub label: String,
    pub total_bytes: Option<u64>,
    pub received_bytes: u64,
    pub progress_percent: u8,
    pub completed: bool,
}

impl DownloadRecord {
    pub fn new(id: DownloadId, request: &DownloadRequest, destination: PathBuf) -> Self {
        Self {
            id,
            source_url: request.source_url.clone(),
            label: file_label(&destination),
            destination,
            total_bytes: request.size_hint.filter(|size| *size > 0),
            received_bytes: 0,
            progress_percent: 0,
            completed: false,
        }
    }
}

/// Display label for a destination: its file name, or the whole path when
/// there is none.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
