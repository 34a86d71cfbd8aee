//! Download Manager for PaperBrowser.
//!
//! Bookkeeping for downloads the user accepted. The bytes themselves are
//! fetched and written by the render engine; this only tracks what the engine
//! reports. Records are never removed.

use std::path::{Path, PathBuf};

use crate::types::download::{DownloadId, DownloadRecord, DownloadRequest, COMPLETED_MARKER};
use crate::types::errors::DownloadError;

/// Trait defining download bookkeeping operations.
pub trait DownloadManagerTrait {
    fn start_download(&mut self, request: &DownloadRequest, destination: PathBuf) -> DownloadId;
    /// Applies a progress report. Returns the new displayed percent, or `None`
    /// when the total is unknown and the display was left as it was.
    fn update_progress(
        &mut self,
        id: DownloadId,
        received: u64,
        total: i64,
    ) -> Result<Option<u8>, DownloadError>;
    fn mark_finished(&mut self, id: DownloadId) -> Result<&DownloadRecord, DownloadError>;
    fn list_downloads(&self) -> &[DownloadRecord];
    fn get_download(&self, id: DownloadId) -> Option<&DownloadRecord>;
    fn find_by_destination(&self, destination: &Path) -> Option<DownloadId>;
}

/// Percent of `total` covered by `received`, rounded down and capped at 100.
/// `None` when `total` is zero or negative (unknown length).
pub fn progress_percent(received: u64, total: i64) -> Option<u8> {
    if total <= 0 {
        return None;
    }
    let percent = (received as u128 * 100) / total as u128;
    Some(percent.min(100) as u8)
}

/// In-memory download list, in acceptance order.
#[derive(Debug, Default)]
pub struct DownloadManager {
    downloads: Vec<DownloadRecord>,
}

impl DownloadManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_index(&self, id: DownloadId) -> Result<usize, DownloadError> {
        self.downloads
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| DownloadError::NotFound(id.to_string()))
    }
}

impl DownloadManagerTrait for DownloadManager {
    fn start_download(&mut self, request: &DownloadRequest, destination: PathBuf) -> DownloadId {
        let id = DownloadId::new();
        self.downloads
            .push(DownloadRecord::new(id, request, destination));
        id
    }

    fn update_progress(
        &mut self,
        id: DownloadId,
        received: u64,
        total: i64,
    ) -> Result<Option<u8>, DownloadError> {
        let idx = self.find_index(id)?;
        let record = &mut self.downloads[idx];
        record.received_bytes = received;

        let Some(percent) = progress_percent(received, total) else {
            return Ok(None);
        };
        record.total_bytes = Some(total as u64);
        record.progress_percent = percent;
        Ok(Some(percent))
    }

    fn mark_finished(&mut self, id: DownloadId) -> Result<&DownloadRecord, DownloadError> {
        let idx = self.find_index(id)?;
        let record = &mut self.downloads[idx];
        record.progress_percent = 100;
        if !record.completed {
            record.completed = true;
            record.label.push_str(COMPLETED_MARKER);
        }
        Ok(record)
    }

    fn list_downloads(&self) -> &[DownloadRecord] {
        &self.downloads
    }

    fn get_download(&self, id: DownloadId) -> Option<&DownloadRecord> {
        self.downloads.iter().find(|d| d.id == id)
    }

    fn find_by_destination(&self, destination: &Path) -> Option<DownloadId> {
        self.downloads
            .iter()
            .rev()
            .find(|d| d.destination == destination)
            .map(|d| d.id)
    }
}
