//! The session store: the ordered collection of images under edit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::EditParams;

use super::EditUpdate;

/// Identifier for one image entry, unique within its session.
///
/// Ids are allocated from a per-store counter and never reused, so a stale
/// id can only ever miss, not alias a different entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// Reconstruct an id from its raw value, e.g. one received back from
    /// the UI boundary.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from session store operations.
///
/// These are expected, recoverable conditions: the caller re-derives valid
/// ids from the current collection and retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No entry with the given id exists.
    #[error("No image with id {0} exists in the session")]
    NotFound(EntryId),
}

/// One image under edit: its immutable source bytes plus its parameter set.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    /// Unique, stable identifier for this entry's lifetime.
    pub id: EntryId,
    /// Original, undecoded image bytes. Never mutated; there is no setter.
    pub source: Vec<u8>,
    /// The entry's edit parameters.
    pub params: EditParams,
}

/// The ordered collection of images under edit.
///
/// Entries keep insertion order; removal never reorders survivors. All
/// parameter mutation goes through [`SessionStore::update`], which applies
/// a single [`EditUpdate`] with write-time normalization, so stored state
/// always satisfies the parameter invariants.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: Vec<ImageEntry>,
    next_id: u32,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append one new entry per source, in order, with fresh ids and default
    /// parameters. Returns the new ids. Identical sources are not deduped.
    pub fn add(&mut self, sources: Vec<Vec<u8>>) -> Vec<EntryId> {
        let mut ids = Vec::with_capacity(sources.len());
        for source in sources {
            let id = EntryId(self.next_id);
            self.next_id += 1;
            self.entries.push(ImageEntry {
                id,
                source,
                params: EditParams::default(),
            });
            ids.push(id);
        }
        ids
    }

    /// Remove the entry with the given id.
    ///
    /// Fails with [`SessionError::NotFound`] and leaves the collection
    /// untouched if the id is absent. Survivors keep their order.
    pub fn remove(&mut self, id: EntryId) -> Result<(), SessionError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(SessionError::NotFound(id))?;
        self.entries.remove(index);
        Ok(())
    }

    /// Apply one update to the entry with the given id.
    ///
    /// Updates are plain synchronous field writes, safe to call at
    /// pointer-move frequency; the last write for a field wins.
    pub fn update(&mut self, id: EntryId, update: EditUpdate) -> Result<(), SessionError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(SessionError::NotFound(id))?;
        update.apply_to(&mut entry.params);
        Ok(())
    }

    /// Look up one entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&ImageEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
