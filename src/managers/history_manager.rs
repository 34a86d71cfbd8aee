//! History Manager for PaperBrowser.
//!
//! Implements `HistoryManagerTrait`: an append-only log of distinct visited
//! addresses in first-visit order, kept in memory for the process lifetime.

use std::collections::HashSet;

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    /// Appends `url` unless it was visited before. Returns whether it was added.
    fn record_visit(&mut self, url: &str) -> bool;
    fn list_history(&self) -> &[String];
    fn contains(&self, url: &str) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history log.
#[derive(Debug, Default)]
pub struct HistoryManager {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryManagerTrait for HistoryManager {
    fn record_visit(&mut self, url: &str) -> bool {
        if !self.seen.insert(url.to_string()) {
            return false;
        }
        self.entries.push(url.to_string());
        true
    }

    fn list_history(&self) -> &[String] {
        &self.entries
    }

    fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
