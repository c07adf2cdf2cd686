use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use ck_core::ports::{ClockPort, HistoryStoreError, HistoryStorePort};
use ck_core::{ClipboardHistory, Snapshot, SnapshotId};

use super::document::{HistoryDocument, HistoryFileRepository};

/// History store persisted as one JSON document.
///
/// 基于单个 JSON 文件的剪贴板历史存储。
///
/// The lock is held across the in-memory change and the file write, so two
/// mutations never interleave and a reader never sees a state that has not
/// been written (or failed to be written) yet.
pub struct FileHistoryStore {
    history: Mutex<ClipboardHistory>,
    repo: HistoryFileRepository,
    clock: Arc<dyn ClockPort>,
    /// Set when the in-memory state differs from the file.
    dirty: AtomicBool,
    read_only: Option<String>,
}

impl FileHistoryStore {
    /// Open the store at `path`, loading whatever was persisted.
    ///
    /// A missing file starts an empty history bounded by `default_max_items`.
    /// An unreadable or malformed file is moved aside to
    /// `<file>.corrupt-<ms>` and the history starts empty. If it cannot be
    /// moved, the store opens read-only rather than overwrite it.
    pub async fn open(
        path: impl Into<PathBuf>,
        default_max_items: usize,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self::open_with(path.into(), default_max_items, clock, None).await
    }

    /// Open for reading only: every mutation fails with
    /// [`HistoryStoreError::ReadOnly`] carrying `reason`, and nothing is
    /// ever written or moved.
    pub async fn open_read_only(
        path: impl Into<PathBuf>,
        default_max_items: usize,
        clock: Arc<dyn ClockPort>,
        reason: impl Into<String>,
    ) -> Self {
        Self::open_with(path.into(), default_max_items, clock, Some(reason.into())).await
    }

    async fn open_with(
        path: PathBuf,
        default_max_items: usize,
        clock: Arc<dyn ClockPort>,
        mut read_only: Option<String>,
    ) -> Self {
        let repo = HistoryFileRepository::new(path);
        let default_max_items = default_max_items.max(1);

        let history = match repo.load().await {
            Ok(Some(document)) => {
                let max_items = document
                    .max_items
                    .filter(|m| *m > 0)
                    .unwrap_or(default_max_items);
                let history = ClipboardHistory::from_parts(document.items, max_items);
                info!(
                    path = %repo.path().display(),
                    items = history.len(),
                    max_items,
                    "Loaded clipboard history"
                );
                history
            }
            Ok(None) => {
                debug!(path = %repo.path().display(), "No clipboard history yet, starting empty");
                ClipboardHistory::new(default_max_items)
            }
            Err(err) => {
                warn!(
                    path = %repo.path().display(),
                    error = %format!("{err:#}"),
                    "Clipboard history unreadable, starting empty"
                );
                if read_only.is_none() && repo.exists().await {
                    match repo.quarantine(clock.now_ms()).await {
                        Ok(moved_to) => warn!(
                            moved_to = %moved_to.display(),
                            "Unreadable clipboard history moved aside"
                        ),
                        Err(err) => {
                            error!(
                                error = %format!("{err:#}"),
                                "Could not move unreadable clipboard history aside, opening read-only"
                            );
                            read_only = Some(format!(
                                "{} could not be read or moved aside",
                                repo.path().display()
                            ));
                        }
                    }
                }
                ClipboardHistory::new(default_max_items)
            }
        };

        Self {
            history: Mutex::new(history),
            repo,
            clock,
            dirty: AtomicBool::new(false),
            read_only,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.repo.path()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.is_some()
    }

    fn ensure_writable(&self) -> Result<(), HistoryStoreError> {
        match &self.read_only {
            Some(reason) => Err(HistoryStoreError::ReadOnly(reason.clone())),
            None => Ok(()),
        }
    }

    async fn persist(&self, history: &ClipboardHistory) -> Result<(), HistoryStoreError> {
        let document = HistoryDocument {
            items: history.items().to_vec(),
            max_items: Some(history.max_items()),
        };

        match self.repo.save(&document).await {
            Ok(()) => {
                self.dirty.store(false, Ordering::Release);
                Ok(())
            }
            Err(err) => {
                self.dirty.store(true, Ordering::Release);
                warn!(
                    path = %self.repo.path().display(),
                    error = %format!("{err:#}"),
                    "Failed to persist clipboard history"
                );
                Err(HistoryStoreError::Persistence(format!("{err:#}")))
            }
        }
    }
}

#[async_trait]
impl HistoryStorePort for FileHistoryStore {
    async fn add_item(&self, snapshot: Snapshot) -> Result<(), HistoryStoreError> {
        self.ensure_writable()?;
        let mut history = self.history.lock().await;
        let evicted = history.add(snapshot);
        debug!(len = history.len(), evicted, "Clipboard entry added");
        self.persist(&history).await
    }

    async fn get_all_items(&self) -> Vec<Snapshot> {
        self.history.lock().await.items().to_vec()
    }

    async fn get_item_by_id(&self, id: &SnapshotId) -> Option<Snapshot> {
        self.history.lock().await.get(id).cloned()
    }

    async fn search_items(&self, query: &str) -> Vec<Snapshot> {
        self.history.lock().await.search(query)
    }

    async fn delete_item(&self, id: &SnapshotId) -> Result<(), HistoryStoreError> {
        self.ensure_writable()?;
        let mut history = self.history.lock().await;
        if !history.delete(id) {
            debug!(%id, "Delete of unknown clipboard entry ignored");
            return Ok(());
        }
        self.persist(&history).await
    }

    async fn clear_all(&self) -> Result<(), HistoryStoreError> {
        self.ensure_writable()?;
        let mut history = self.history.lock().await;
        let removed = history.clear();
        info!(removed, "Clipboard history cleared");
        self.persist(&history).await
    }

    async fn clear_oldest(&self, count: i64) -> Result<(), HistoryStoreError> {
        self.ensure_writable()?;
        let mut history = self.history.lock().await;
        let removed = history.clear_oldest(count);
        if removed == 0 {
            return Ok(());
        }
        info!(requested = count, removed, "Oldest clipboard entries cleared");
        self.persist(&history).await
    }

    async fn update_last_used(&self, id: &SnapshotId) -> Result<(), HistoryStoreError> {
        self.ensure_writable()?;
        let mut history = self.history.lock().await;
        if !history.touch(id, self.clock.now_ms()) {
            debug!(%id, "Touch of unknown clipboard entry ignored");
            return Ok(());
        }
        self.persist(&history).await
    }

    async fn get_max_items(&self) -> usize {
        self.history.lock().await.max_items()
    }

    async fn set_max_items(&self, max_items: usize) -> Result<(), HistoryStoreError> {
        self.ensure_writable()?;
        if max_items == 0 {
            return Err(HistoryStoreError::InvalidCapacity(max_items));
        }

        let mut history = self.history.lock().await;
        let evicted = history.set_max_items(max_items);
        info!(max_items, evicted, "Clipboard history capacity changed");
        self.persist(&history).await
    }

    /// Write only what a failed save left behind; a clean store is a no-op.
    async fn flush(&self) -> Result<(), HistoryStoreError> {
        let history = self.history.lock().await;
        if self.read_only.is_some() || !self.dirty.load(Ordering::Acquire) {
            debug!("Clipboard history clean, nothing to flush");
            return Ok(());
        }
        self.persist(&history).await
    }
}
