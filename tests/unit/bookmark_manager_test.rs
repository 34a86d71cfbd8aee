use paperbrowser::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use paperbrowser::types::errors::BookmarkError;

#[test]
fn test_add_and_list_in_insertion_order() {
    let mut mgr = BookmarkManager::new();
    mgr.add_bookmark("https://b.com").unwrap();
    mgr.add_bookmark("https://a.com").unwrap();
    assert_eq!(mgr.list_bookmarks(), ["https://b.com", "https://a.com"]);
}

#[test]
fn test_duplicate_rejected() {
    let mut mgr = BookmarkManager::new();
    mgr.add_bookmark("https://a.com").unwrap();
    assert_eq!(
        mgr.add_bookmark("https://a.com"),
        Err(BookmarkError::DuplicateUrl("https://a.com".to_string()))
    );
    assert_eq!(mgr.list_bookmarks().len(), 1);
}

#[test]
fn test_empty_rejected() {
    let mut mgr = BookmarkManager::new();
    assert_eq!(mgr.add_bookmark(""), Err(BookmarkError::EmptyUrl));
    assert!(mgr.list_bookmarks().is_empty());
}

#[test]
fn test_is_bookmarked() {
    let mut mgr = BookmarkManager::new();
    mgr.add_bookmark("https://a.com").unwrap();
    assert!(mgr.is_bookmarked("https://a.com"));
    assert!(!mgr.is_bookmarked("https://b.com"));
}
