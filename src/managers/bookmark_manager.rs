//! Bookmark Manager for PaperBrowser.
//!
//! Bookmarks are plain addresses in insertion order. Re-adding an address
//! is rejected and leaves the existing order untouched.

use crate::types::errors::BookmarkError;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, url: &str) -> Result<(), BookmarkError>;
    fn list_bookmarks(&self) -> &[String];
    fn is_bookmarked(&self, url: &str) -> bool;
}

/// In-memory bookmark set.
#[derive(Debug, Default)]
pub struct BookmarkManager {
    bookmarks: Vec<String>,
}

impl BookmarkManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add_bookmark(&mut self, url: &str) -> Result<(), BookmarkError> {
        if url.is_empty() {
            return Err(BookmarkError::EmptyUrl);
        }
        if self.is_bookmarked(url) {
            return Err(BookmarkError::DuplicateUrl(url.to_string()));
        }
        self.bookmarks.push(url.to_string());
        Ok(())
    }

    fn list_bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b == url)
    }
}
