use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{broadcast, mpsc, oneshot};

use ck_core::ports::ClipboardChangeHandler;
use ck_core::{Snapshot, SnapshotId, SnapshotKind};

use super::messages::{CoreError, CoreNotification, CoreRequest, Reply};

/// Cloneable client of the [`CoreRuntime`](super::CoreRuntime).
///
/// Every call is one request on the core channel and waits for its reply.
#[derive(Clone)]
pub struct CoreHandle {
    tx: mpsc::Sender<CoreRequest>,
    notifications: broadcast::Sender<CoreNotification>,
}

impl CoreHandle {
    pub(crate) fn new(
        tx: mpsc::Sender<CoreRequest>,
        notifications: broadcast::Sender<CoreNotification>,
    ) -> Self {
        Self { tx, notifications }
    }

    /// Receive pushed notifications from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<CoreNotification> {
        self.notifications.subscribe()
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Reply<T>) -> CoreRequest,
    ) -> Result<T, CoreError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| CoreError::RuntimeStopped)?;
        rx.await.map_err(|_| CoreError::RuntimeStopped)?
    }

    pub async fn capture(&self, snapshot: Snapshot) -> Result<(), CoreError> {
        self.request(|reply| CoreRequest::Capture { snapshot, reply })
            .await
    }

    pub async fn get_all_items(&self) -> Result<Vec<Snapshot>, CoreError> {
        self.request(|reply| CoreRequest::GetAllItems { reply }).await
    }

    pub async fn search_items(&self, query: impl Into<String>) -> Result<Vec<Snapshot>, CoreError> {
        let query = query.into();
        self.request(|reply| CoreRequest::SearchItems { query, reply })
            .await
    }

    pub async fn get_item_by_id(&self, id: SnapshotId) -> Result<Option<Snapshot>, CoreError> {
        self.request(|reply| CoreRequest::GetItemById { id, reply })
            .await
    }

    pub async fn get_max_items(&self) -> Result<usize, CoreError> {
        self.request(|reply| CoreRequest::GetMaxItems { reply }).await
    }

    pub async fn copy_to_clipboard(
        &self,
        kind: SnapshotKind,
        content: impl Into<String>,
    ) -> Result<(), CoreError> {
        let content = content.into();
        self.request(|reply| CoreRequest::CopyToClipboard {
            kind,
            content,
            reply,
        })
        .await
    }

    pub async fn delete_item(&self, id: SnapshotId) -> Result<(), CoreError> {
        self.request(|reply| CoreRequest::DeleteItem { id, reply })
            .await
    }

    pub async fn clear_all(&self) -> Result<(), CoreError> {
        self.request(|reply| CoreRequest::ClearAll { reply }).await
    }

    pub async fn clear_oldest(&self, count: i64) -> Result<(), CoreError> {
        self.request(|reply| CoreRequest::ClearOldest { count, reply })
            .await
    }

    pub async fn update_last_used(&self, id: SnapshotId) -> Result<(), CoreError> {
        self.request(|reply| CoreRequest::UpdateLastUsed { id, reply })
            .await
    }

    pub async fn set_max_items(&self, max_items: usize) -> Result<(), CoreError> {
        self.request(|reply| CoreRequest::SetMaxItems { max_items, reply })
            .await
    }

    /// Ask the loop to stop after the requests already queued.
    pub async fn shutdown(&self) {
        // already stopped if the channel is closed
        let _ = self.tx.send(CoreRequest::Shutdown).await;
    }
}

#[async_trait]
impl ClipboardChangeHandler for CoreHandle {
    async fn on_clipboard_changed(&self, snapshot: Snapshot) -> Result<()> {
        self.capture(snapshot).await?;
        Ok(())
    }
}
