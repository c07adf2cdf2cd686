//! Ordered, capacity-bounded, deduplicating clipboard history.
//!
//! 有序、有容量上限、去重的剪贴板历史。
//!
//! ## Invariants
//!
//! - Items are ordered most-recently-captured first; position is the only index.
//! - `len() <= max_items()` after every operation.
//! - No two items share the same `(kind, content)`.
//!
//! This type is pure in-memory policy. Persistence is the concern of the
//! `HistoryStorePort` implementations.

use serde::{Deserialize, Serialize};

use super::Snapshot;
use crate::ids::SnapshotId;

/// Default capacity bound of the history.
pub const DEFAULT_MAX_ITEMS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardHistory {
    items: Vec<Snapshot>,
    max_items: usize,
}

impl Default for ClipboardHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITEMS)
    }
}

impl ClipboardHistory {
    pub fn new(max_items: usize) -> Self {
        Self {
            items: Vec::new(),
            max_items,
        }
    }

    /// Rebuild a history from previously persisted parts.
    ///
    /// Entries with empty content and later duplicates are dropped, and the
    /// tail is cut to `max_items`, so the invariants hold even for a
    /// hand-edited document.
    pub fn from_parts(items: Vec<Snapshot>, max_items: usize) -> Self {
        let mut kept: Vec<Snapshot> = Vec::with_capacity(items.len().min(max_items));
        for item in items {
            if item.is_valid() && !kept.iter().any(|k| k.same_content(&item)) {
                kept.push(item);
            }
        }
        kept.truncate(max_items);

        Self {
            items: kept,
            max_items,
        }
    }

    pub fn items(&self) -> &[Snapshot] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Snapshot> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Insert a snapshot at the front.
    ///
    /// An existing entry with the same `(kind, content)` is removed wherever it
    /// sits, so a repeated copy refreshes its position instead of creating a
    /// second entry. Returns the number of entries evicted from the tail.
    pub fn add(&mut self, snapshot: Snapshot) -> usize {
        if let Some(pos) = self.items.iter().position(|i| i.same_content(&snapshot)) {
            self.items.remove(pos);
        }

        self.items.insert(0, snapshot);
        self.enforce_capacity()
    }

    pub fn get(&self, id: &SnapshotId) -> Option<&Snapshot> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Remove the entry with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: &SnapshotId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() != before
    }

    /// Remove every entry. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Remove the `count` oldest (tail-most) entries.
    ///
    /// A non-positive `count` is a no-op; a `count` larger than the history
    /// removes everything. Returns how many were removed.
    pub fn clear_oldest(&mut self, count: i64) -> usize {
        if count <= 0 {
            return 0;
        }

        let remove = usize::try_from(count).unwrap_or(usize::MAX).min(self.items.len());
        let keep = self.items.len() - remove;
        self.items.truncate(keep);
        remove
    }

    /// Text entries whose content contains `query`, ignoring case.
    ///
    /// An empty query returns the whole history, images included.
    pub fn search(&self, query: &str) -> Vec<Snapshot> {
        if query.is_empty() {
            return self.items.clone();
        }

        let lowered = query.to_lowercase();
        self.items
            .iter()
            .filter(|i| i.matches_lowered(&lowered))
            .cloned()
            .collect()
    }

    /// Set `last_used_at` of the entry with `id`. Returns `false` if absent.
    pub fn touch(&mut self, id: &SnapshotId, now_ms: i64) -> bool {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.last_used_at = Some(now_ms);
                true
            }
            None => false,
        }
    }

    /// Change the capacity bound, truncating the tail immediately when it
    /// shrinks. Returns the number of entries evicted.
    pub fn set_max_items(&mut self, max_items: usize) -> usize {
        self.max_items = max_items;
        self.enforce_capacity()
    }

    fn enforce_capacity(&mut self) -> usize {
        if self.items.len() <= self.max_items {
            return 0;
        }

        let evicted = self.items.len() - self.max_items;
        self.items.truncate(self.max_items);

        #[cfg(feature = "tracing")]
        tracing::debug!(evicted, max_items = self.max_items, "Evicted oldest clipboard entries");

        evicted
    }
}
