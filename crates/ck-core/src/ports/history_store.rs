//! History store port
//!
//! 剪贴板历史存储端口。
//!
//! Every mutating call applies the change in memory and persists the whole
//! history before returning. Calls are serialized by the implementation.

use async_trait::async_trait;

use crate::clipboard::Snapshot;
use crate::ids::SnapshotId;

#[derive(Debug, thiserror::Error)]
pub enum HistoryStoreError {
    /// The in-memory change was applied but writing it out failed.
    #[error("failed to persist clipboard history: {0}")]
    Persistence(String),

    #[error("max_items must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// Mutations are refused; the reason says who owns the file.
    #[error("clipboard history is read-only: {0}")]
    ReadOnly(String),
}

#[async_trait]
pub trait HistoryStorePort: Send + Sync {
    /// Insert at the front, deduplicating and evicting as needed.
    async fn add_item(&self, snapshot: Snapshot) -> Result<(), HistoryStoreError>;

    /// Whole history, most recent first.
    async fn get_all_items(&self) -> Vec<Snapshot>;

    async fn get_item_by_id(&self, id: &SnapshotId) -> Option<Snapshot>;

    /// Case-insensitive text search; an empty query returns everything.
    async fn search_items(&self, query: &str) -> Vec<Snapshot>;

    /// Removing an unknown id succeeds and changes nothing.
    async fn delete_item(&self, id: &SnapshotId) -> Result<(), HistoryStoreError>;

    async fn clear_all(&self) -> Result<(), HistoryStoreError>;

    /// Drop the `count` oldest entries. Non-positive counts are a no-op.
    async fn clear_oldest(&self, count: i64) -> Result<(), HistoryStoreError>;

    /// Stamp `last_used_at` with the current time. Unknown ids are ignored.
    async fn update_last_used(&self, id: &SnapshotId) -> Result<(), HistoryStoreError>;

    async fn get_max_items(&self) -> usize;

    /// Change the capacity bound, truncating immediately. Zero is rejected.
    async fn set_max_items(&self, max_items: usize) -> Result<(), HistoryStoreError>;

    /// Write the current state out again.
    async fn flush(&self) -> Result<(), HistoryStoreError>;
}
