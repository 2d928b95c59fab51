// checkledger - core/checklist.rs
//
// Checklist business logic: pure, in-memory CRUD over an ordered list
// of items. Persistence lives in app/store.rs; audit emission in
// app/audit.rs. This module never touches the filesystem.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable numeric ID, unique within the checklist's lifetime.
    pub id: u64,

    /// User-entered item text.
    pub text: String,

    /// Whether the item has been marked complete.
    #[serde(default)]
    pub done: bool,

    /// When the item was added.
    pub created: NaiveDateTime,
}

/// An ordered checklist with monotonically assigned item IDs.
///
/// IDs are never reused after removal, so an ID in the audit trail
/// always denotes one item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
    #[serde(default)]
    next_id: u64,
}

impl Checklist {
    /// Add a new item; returns a reference to it.
    pub fn add(&mut self, text: impl Into<String>, created: NaiveDateTime) -> &ChecklistItem {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ChecklistItem {
            id,
            text: text.into(),
            done: false,
            created,
        });
        self.items.last().expect("item was just pushed")
    }

    /// Mark the item with `id` complete.
    ///
    /// Returns the item on success, `None` if the ID does not exist.
    /// Completing an already-complete item is a no-op that still
    /// succeeds (the caller decides whether to mention it).
    pub fn complete(&mut self, id: u64) -> Option<&ChecklistItem> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.done = true;
        Some(item)
    }

    /// Remove the item with `id`, returning it if present.
    pub fn remove(&mut self, id: u64) -> Option<ChecklistItem> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Look up a single item.
    pub fn get(&self, id: u64) -> Option<&ChecklistItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
