//! Process-local slot repository.

use crate::repo::slot_repo::{validate_key, RepoResult, SlotRepository};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory slot repository.
///
/// Clones share the same backing map, so a caller can hand one clone to the
/// store and keep another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotRepository {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with `(key, value)` pairs.
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = slots
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            slots: Rc::new(RefCell::new(map)),
        }
    }

    /// Number of written slots.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SlotRepository for MemorySlotRepository {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        validate_key(key)?;
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
