use std::path::{Path, PathBuf};

use paperbrowser::managers::download_manager::{
    progress_percent, DownloadManager, DownloadManagerTrait,
};
use paperbrowser::types::download::{DownloadId, DownloadRequest, COMPLETED_MARKER};
use paperbrowser::types::errors::DownloadError;
use rstest::rstest;

fn request(url: &str) -> DownloadRequest {
    DownloadRequest {
        source_url: url.to_string(),
        proposed_path: PathBuf::from("file.bin"),
        size_hint: None,
    }
}

#[rstest]
#[case(0, 100, Some(0))]
#[case(30, 100, Some(30))]
#[case(1, 3, Some(33))]
#[case(100, 100, Some(100))]
#[case(150, 100, Some(100))]
#[case(u64::MAX, i64::MAX, Some(100))]
#[case(10, 0, None)]
#[case(10, -1, None)]
fn test_progress_percent(#[case] received: u64, #[case] total: i64, #[case] expected: Option<u8>) {
    assert_eq!(progress_percent(received, total), expected);
}

#[test]
fn test_start_download_records_label_and_destination() {
    let mut mgr = DownloadManager::new();
    let id = mgr.start_download(&request("http://x/a.zip"), PathBuf::from("/tmp/out/a.zip"));

    let record = mgr.get_download(id).unwrap();
    assert_eq!(record.label, "a.zip");
    assert_eq!(record.source_url, "http://x/a.zip");
    assert_eq!(record.destination, Path::new("/tmp/out/a.zip"));
    assert_eq!(record.progress_percent, 0);
    assert!(!record.completed);
}

#[test]
fn test_update_progress_with_known_total() {
    let mut mgr = DownloadManager::new();
    let id = mgr.start_download(&request("u"), PathBuf::from("/tmp/f"));

    assert_eq!(mgr.update_progress(id, 30, 100).unwrap(), Some(30));
    let record = mgr.get_download(id).unwrap();
    assert_eq!(record.progress_percent, 30);
    assert_eq!(record.total_bytes, Some(100));
    assert_eq!(record.received_bytes, 30);
}

#[test]
fn test_update_progress_unknown_total_keeps_percent() {
    let mut mgr = DownloadManager::new();
    let id = mgr.start_download(&request("u"), PathBuf::from("/tmp/f"));
    mgr.update_progress(id, 30, 100).unwrap();

    assert_eq!(mgr.update_progress(id, 60, -1).unwrap(), None);
    assert_eq!(mgr.get_download(id).unwrap().progress_percent, 30);
}

#[test]
fn test_mark_finished_is_idempotent() {
    let mut mgr = DownloadManager::new();
    let id = mgr.start_download(&request("u"), PathBuf::from("/tmp/report.pdf"));
    mgr.update_progress(id, 10, 100).unwrap();

    let record = mgr.mark_finished(id).unwrap();
    assert_eq!(record.progress_percent, 100);
    assert_eq!(record.label, format!("report.pdf{}", COMPLETED_MARKER));

    let record = mgr.mark_finished(id).unwrap();
    assert_eq!(record.label, "report.pdf (Completed)");
    assert!(record.completed);
}

#[test]
fn test_unknown_download() {
    let mut mgr = DownloadManager::new();
    let id = DownloadId::new();
    assert_eq!(
        mgr.update_progress(id, 1, 2),
        Err(DownloadError::NotFound(id.to_string()))
    );
    assert!(mgr.mark_finished(id).is_err());
}

#[test]
fn test_find_by_destination_prefers_latest() {
    let mut mgr = DownloadManager::new();
    let first = mgr.start_download(&request("u1"), PathBuf::from("/tmp/same"));
    let second = mgr.start_download(&request("u2"), PathBuf::from("/tmp/same"));
    assert_ne!(first, second);
    assert_eq!(mgr.find_by_destination(Path::new("/tmp/same")), Some(second));
    assert_eq!(mgr.find_by_destination(Path::new("/tmp/other")), None);
    assert_eq!(mgr.list_downloads().len(), 2);
}
