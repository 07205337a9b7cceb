//! Record store
//!
//! The core of the system: a unique-by-id set of items with a derived
//! description-ordered view.
//!
//! ## Responsibilities
//! - Enforce at most one stored item per id
//! - Serve lookup and removal by id
//! - Produce the description-ordered snapshot for display
//!
//! ## Data Structure Choice
//! A single owning `BTreeMap<String, StoredItem>` keyed by id. The
//! description ordering is computed on demand by sorting a snapshot of the
//! values rather than maintained as a second live index, so the two views
//! can never diverge and a failed operation can never leave a half-updated
//! store.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::{Result, StoreError};
use crate::item::StoredItem;

/// The in-memory record store
///
/// Lives for the process lifetime; nothing is persisted. Mutating operations
/// take `&mut self`, so concurrent callers must serialize access themselves.
#[derive(Debug, Default)]
pub struct StorageManager {
    /// Canonical set of items, keyed by id
    items: BTreeMap<String, StoredItem>,
}

impl StorageManager {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed item
    ///
    /// Fails with [`StoreError::DuplicateKey`] when an item with the same id
    /// is already stored. On failure nothing changes.
    pub fn add_item(&mut self, item: StoredItem) -> Result<()> {
        match self.items.entry(item.id().to_owned()) {
            Entry::Occupied(occupied) => Err(StoreError::DuplicateKey(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(item);
                Ok(())
            }
        }
    }

    /// Look up an item by id
    ///
    /// Returns a shared borrow; the store retains ownership. Fails with
    /// [`StoreError::ItemNotFound`] when the id is absent.
    pub fn find_by_id(&self, id: &str) -> Result<&StoredItem> {
        self.items
            .get(id)
            .ok_or_else(|| StoreError::ItemNotFound(id.to_owned()))
    }

    /// Remove the item with the given id
    ///
    /// Fails with [`StoreError::ItemNotFound`] when the id is absent; the
    /// store is left unchanged in that case.
    pub fn remove_item(&mut self, id: &str) -> Result<()> {
        self.items
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::ItemNotFound(id.to_owned()))
    }

    /// All items ordered by ascending description, ties by ascending id
    ///
    /// Byte-wise `str` ordering on both keys. Returns a point-in-time
    /// snapshot of clones: iterating it is unaffected by (and does not
    /// affect) later mutations.
    pub fn list_items_by_description(&self) -> Vec<StoredItem> {
        let mut items: Vec<StoredItem> = self.items.values().cloned().collect();
        items.sort_by(|a, b| {
            a.description()
                .cmp(b.description())
                .then_with(|| a.id().cmp(b.id()))
        });
        items
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
