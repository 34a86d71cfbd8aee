use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabEntry, TabId, TabKind};

/// In-memory tab strip for the browser.
///
/// Holds the entries in display order plus the active tab. `E` is the render
/// engine type owned by each ordinary tab; removing an entry hands the engine
/// back to the caller, who releases it by dropping.
pub struct TabManager<E> {
    entries: Vec<TabEntry<E>>,
    active_tab_id: Option<TabId>,
}

impl<E> TabManager<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active_tab_id: None,
        }
    }

    fn find_index(&self, tab_id: TabId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == tab_id)
    }

    /// Append an ordinary tab to the end of the strip. The first tab ever
    /// added becomes active.
    pub fn push_ordinary(&mut self, tab: Tab<E>) -> TabId {
        let id = tab.id;
        self.entries.push(TabEntry::Ordinary(tab));
        if self.active_tab_id.is_none() {
            self.active_tab_id = Some(id);
        }
        id
    }

    /// Append the downloads pseudo-tab, unless it is already present.
    /// Returns the id of the (possibly pre-existing) downloads entry.
    pub fn ensure_downloads(&mut self) -> (TabId, bool) {
        if let Some(id) = self.downloads_id() {
            return (id, false);
        }
        let id = TabId::new();
        self.entries.push(TabEntry::Downloads { id });
        if self.active_tab_id.is_none() {
            self.active_tab_id = Some(id);
        }
        (id, true)
    }

    /// Remove a tab. If it was active, the neighbour that slides into its
    /// position (or the new last entry) becomes active.
    pub fn remove(&mut self, tab_id: TabId) -> Result<TabEntry<E>, TabError> {
        let idx = self
            .find_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        let entry = self.entries.remove(idx);

        if self.active_tab_id == Some(tab_id) {
            self.active_tab_id = if self.entries.is_empty() {
                None
            } else {
                Some(self.entries[idx.min(self.entries.len() - 1)].id())
            };
        }

        Ok(entry)
    }

    pub fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        if self.find_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = Some(tab_id);
        Ok(())
    }

    pub fn get(&self, tab_id: TabId) -> Option<&TabEntry<E>> {
        self.entries.iter().find(|e| e.id() == tab_id)
    }

    pub fn get_mut(&mut self, tab_id: TabId) -> Option<&mut TabEntry<E>> {
        self.entries.iter_mut().find(|e| e.id() == tab_id)
    }

    /// The ordinary tab with the given id, if any.
    pub fn ordinary(&self, tab_id: TabId) -> Option<&Tab<E>> {
        self.get(tab_id).and_then(TabEntry::as_ordinary)
    }

    pub fn ordinary_mut(&mut self, tab_id: TabId) -> Option<&mut Tab<E>> {
        self.get_mut(tab_id).and_then(TabEntry::as_ordinary_mut)
    }

    pub fn kind_of(&self, tab_id: TabId) -> Option<TabKind> {
        self.get(tab_id).map(TabEntry::kind)
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    pub fn active_entry(&self) -> Option<&TabEntry<E>> {
        self.active_tab_id.and_then(|id| self.get(id))
    }

    /// The active tab when it hosts a render engine; `None` while the
    /// downloads pseudo-tab is shown.
    pub fn current_tab(&self) -> Option<&Tab<E>> {
        self.active_entry().and_then(TabEntry::as_ordinary)
    }

    pub fn current_tab_mut(&mut self) -> Option<&mut Tab<E>> {
        let id = self.active_tab_id?;
        self.ordinary_mut(id)
    }

    pub fn downloads_id(&self) -> Option<TabId> {
        self.entries.iter().find_map(|e| match e {
            TabEntry::Downloads { id } => Some(*id),
            TabEntry::Ordinary(_) => None,
        })
    }

    pub fn tab_count(&self) -> usize {
        self.entries.len()
    }

    pub fn ordinary_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind() == TabKind::Ordinary)
            .count()
    }

    /// Tab ids in strip order.
    pub fn tab_order(&self) -> Vec<TabId> {
        self.entries.iter().map(TabEntry::id).collect()
    }

    pub fn entries(&self) -> &[TabEntry<E>] {
        &self.entries
    }
}

impl<E> Default for TabManager<E> {
    fn default() -> Self {
        Self::new()
    }
}
