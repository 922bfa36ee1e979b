//! Session orchestration: the active-entry pointer over a session store.

use super::{EditUpdate, EntryId, ImageEntry, SessionError, SessionStore};

/// An edit session: a [`SessionStore`] plus the single active-entry pointer.
///
/// This is the only component allowed to hold the active id, and every
/// mutation that can invalidate it re-derives it from the current
/// collection, so the pointer never dangles.
#[derive(Debug, Default)]
pub struct EditSession {
    store: SessionStore,
    active: Option<EntryId>,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            store: SessionStore::new(),
            active: None,
        }
    }

    /// Ingest new source images. The first newly added entry becomes
    /// active, matching how the editor focuses a fresh selection.
    pub fn ingest(&mut self, sources: Vec<Vec<u8>>) -> Vec<EntryId> {
        let ids = self.store.add(sources);
        if let Some(first) = ids.first() {
            self.active = Some(*first);
        }
        ids
    }

    /// Remove an entry. On success the active pointer is re-derived: the
    /// first remaining entry, or `None` when the session emptied.
    pub fn remove(&mut self, id: EntryId) -> Result<(), SessionError> {
        self.store.remove(id)?;
        self.active = self.store.list().first().map(|entry| entry.id);
        Ok(())
    }

    /// Make an entry active. Fails with [`SessionError::NotFound`] unless
    /// the id refers to a live entry.
    pub fn set_active(&mut self, id: EntryId) -> Result<(), SessionError> {
        if self.store.entry(id).is_none() {
            return Err(SessionError::NotFound(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// The currently active entry id, if any.
    pub fn active(&self) -> Option<EntryId> {
        self.active
    }

    /// The currently active entry, if any.
    pub fn active_entry(&self) -> Option<&ImageEntry> {
        self.active.and_then(|id| self.store.entry(id))
    }

    /// Apply a parameter update to an entry.
    pub fn update(&mut self, id: EntryId, update: EditUpdate) -> Result<(), SessionError> {
        self.store.update(id, update)
    }

    /// Look up one entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&ImageEntry> {
        self.store.entry(id)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[ImageEntry] {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Remove every entry and clear the active pointer.
    pub fn clear(&mut self) {
        self.store.clear();
        self.active = None;
    }
}
