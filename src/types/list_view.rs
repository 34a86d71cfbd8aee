use serde::{Deserialize, Serialize};

/// Which collection a list view was opened over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    History,
    Bookmarks,
}

impl ListKind {
    pub fn title(self) -> &'static str {
        match self {
            ListKind::History => "Browsing History",
            ListKind::Bookmarks => "Bookmarks",
        }
    }
}

/// A list of addresses captured when the view was opened. Later changes to
/// the underlying collection are not reflected in an open view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListView {
    pub kind: ListKind,
    pub title: String,
    pub items: Vec<String>,
}

impl ListView {
    pub fn snapshot(kind: ListKind, items: &[String]) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            items: items.to_vec(),
        }
    }
}
