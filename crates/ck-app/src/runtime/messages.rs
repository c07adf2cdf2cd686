//! Messages crossing the core boundary.
//!
//! `CoreRequest` flows from the presentation layer (and the watcher) into
//! the core loop; `CoreNotification` is pushed back out, unsolicited.

use serde::Serialize;
use tokio::sync::oneshot;

use ck_core::ports::HistoryStoreError;
use ck_core::{Snapshot, SnapshotId, SnapshotKind};

pub type Reply<T> = oneshot::Sender<Result<T, CoreError>>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] HistoryStoreError),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("core runtime is not running")]
    RuntimeStopped,
}

#[derive(Debug)]
pub enum CoreRequest {
    /// Snapshot observed by the watcher.
    Capture {
        snapshot: Snapshot,
        reply: Reply<()>,
    },
    GetAllItems {
        reply: Reply<Vec<Snapshot>>,
    },
    SearchItems {
        query: String,
        reply: Reply<Vec<Snapshot>>,
    },
    GetItemById {
        id: SnapshotId,
        reply: Reply<Option<Snapshot>>,
    },
    GetMaxItems {
        reply: Reply<usize>,
    },
    /// Write content back to the system clipboard; not a history mutation.
    CopyToClipboard {
        kind: SnapshotKind,
        content: String,
        reply: Reply<()>,
    },
    DeleteItem {
        id: SnapshotId,
        reply: Reply<()>,
    },
    ClearAll {
        reply: Reply<()>,
    },
    ClearOldest {
        count: i64,
        reply: Reply<()>,
    },
    UpdateLastUsed {
        id: SnapshotId,
        reply: Reply<()>,
    },
    SetMaxItems {
        max_items: usize,
        reply: Reply<()>,
    },
    Shutdown,
}

impl CoreRequest {
    pub fn operation(&self) -> &'static str {
        match self {
            CoreRequest::Capture { .. } => "capture",
            CoreRequest::GetAllItems { .. } => "get_all_items",
            CoreRequest::SearchItems { .. } => "search_items",
            CoreRequest::GetItemById { .. } => "get_item_by_id",
            CoreRequest::GetMaxItems { .. } => "get_max_items",
            CoreRequest::CopyToClipboard { .. } => "copy_to_clipboard",
            CoreRequest::DeleteItem { .. } => "delete_item",
            CoreRequest::ClearAll { .. } => "clear_all",
            CoreRequest::ClearOldest { .. } => "clear_oldest",
            CoreRequest::UpdateLastUsed { .. } => "update_last_used",
            CoreRequest::SetMaxItems { .. } => "set_max_items",
            CoreRequest::Shutdown => "shutdown",
        }
    }
}

/// Core → presentation push messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoreNotification {
    /// Full history after a change.
    ClipboardUpdated { items: Vec<Snapshot> },

    OperationFailed { operation: String, message: String },
}
