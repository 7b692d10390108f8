//! Ordered In-Memory Collection
//!
//! Uniform CRUD contract shared by foods, drinks, desserts and restrictions:
//! append on add, in-place update keeping position, order-preserving delete,
//! silent no-op on a missing id or an invalid draft.

use log::debug;

use crate::domain::{Draft, Entity};

/// Ordered entries plus a monotonic id source.
///
/// Ids come from a per-collection counter and never repeat within the
/// collection's lifetime, including across deletes.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    next_id: u32,
    entries: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl<T: Entity<Id = u32>> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry built from `draft` with a fresh id.
    ///
    /// Returns `None` without touching the collection when the draft's
    /// trimmed name is empty.
    pub fn add<D: Draft<Entry = T>>(&mut self, draft: D) -> Option<&T> {
        if !draft.is_valid() {
            debug!("add rejected: empty name");
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(draft.build(id));
        self.entries.last()
    }

    /// Replace the entry matching `id` in place, keeping its position and id.
    ///
    /// A missing id or an invalid draft is a silent no-op returning `None`.
    pub fn update<D: Draft<Entry = T>>(&mut self, id: u32, draft: D) -> Option<&T> {
        if !draft.is_valid() {
            debug!("update rejected: empty name");
            return None;
        }
        match self.entries.iter_mut().find(|entry| entry.id() == id) {
            Some(slot) => {
                *slot = draft.build(id);
                Some(&*slot)
            }
            None => {
                debug!("update ignored: id {} not found", id);
                None
            }
        }
    }

    /// Remove the entry matching `id`, preserving the relative order of the
    /// rest. Returns `false` (no-op) when the id is absent.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        let removed = self.entries.len() != before;
        if !removed {
            debug!("delete ignored: id {} not found", id);
        }
        removed
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Full ordered snapshot, used for rendering and summary counts
    pub fn list(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
