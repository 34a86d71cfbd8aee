use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title shown for a tab until its engine reports the document title.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Title of the synthetic downloads tab.
pub const DOWNLOADS_TAB_TITLE: &str = "Downloads";

/// Stable identity of a tab. Bound to the tab itself, never to its position
/// in the strip, so reordering or closing neighbours cannot retarget it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TabId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// What a tab in the strip hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabKind {
    /// A tab backed by its own render engine instance.
    Ordinary,
    /// The download list pseudo-tab.
    Downloads,
}

impl TabKind {
    /// Whether the normal close action may remove a tab of this kind.
    pub fn is_closable(self) -> bool {
        matches!(self, TabKind::Ordinary)
    }
}

/// A browser tab wrapping one render engine instance.
#[derive(Debug)]
pub struct Tab<E> {
    pub id: TabId,
    pub title: String,
    pub address: String,
    /// Percent reported by the engine while a load is in flight.
    pub load_progress: Option<u8>,
    engine: E,
}

impl<E> Tab<E> {
    pub fn new(id: TabId, address: &str, engine: E) -> Self {
        Self {
            id,
            title: NEW_TAB_TITLE.to_string(),
            address: address.to_string(),
            load_progress: None,
            engine,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

/// One slot of the tab strip.
#[derive(Debug)]
pub enum TabEntry<E> {
    Ordinary(Tab<E>),
    Downloads { id: TabId },
}

impl<E> TabEntry<E> {
    pub fn id(&self) -> TabId {
        match self {
            TabEntry::Ordinary(tab) => tab.id,
            TabEntry::Downloads { id } => *id,
        }
    }

    pub fn kind(&self) -> TabKind {
        match self {
            TabEntry::Ordinary(_) => TabKind::Ordinary,
            TabEntry::Downloads { .. } => TabKind::Downloads,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TabEntry::Ordinary(tab) => &tab.title,
            TabEntry::Downloads { .. } => DOWNLOADS_TAB_TITLE,
        }
    }

    pub fn as_ordinary(&self) -> Option<&Tab<E>> {
        match self {
            TabEntry::Ordinary(tab) => Some(tab),
            TabEntry::Downloads { .. } => None,
        }
    }

    pub fn as_ordinary_mut(&mut self) -> Option<&mut Tab<E>> {
        match self {
            TabEntry::Ordinary(tab) => Some(tab),
            TabEntry::Downloads { .. } => None,
        }
    }
}
