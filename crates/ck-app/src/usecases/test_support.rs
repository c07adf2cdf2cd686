//! In-memory store used by the use case tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use ck_core::ports::{HistoryStoreError, HistoryStorePort};
use ck_core::{ClipboardHistory, Snapshot, SnapshotId};

pub struct InMemoryStore {
    history: Mutex<ClipboardHistory>,
    pub fail_writes: AtomicBool,
    now_ms: i64,
}

impl InMemoryStore {
    pub fn new(max_items: usize) -> Self {
        Self {
            history: Mutex::new(ClipboardHistory::new(max_items)),
            fail_writes: AtomicBool::new(false),
            now_ms: 9_000,
        }
    }

    pub fn with_items(max_items: usize, items: &[(&str, &str)]) -> Self {
        let store = Self::new(max_items);
        {
            let mut history = store.history.lock().unwrap();
            for (i, (id, content)) in items.iter().enumerate() {
                history.add(text(id, content, i as i64));
            }
        }
        store
    }

    pub fn contents(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap()
            .items()
            .iter()
            .map(|i| i.content.clone())
            .collect()
    }

    fn write(&self) -> Result<(), HistoryStoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HistoryStoreError::Persistence("disk full".into()));
        }
        Ok(())
    }
}

pub fn text(id: &str, content: &str, ts: i64) -> Snapshot {
    Snapshot::text(content, ts, 100)
        .unwrap()
        .with_id(SnapshotId::from(id))
}

#[async_trait]
impl HistoryStorePort for InMemoryStore {
    async fn add_item(&self, snapshot: Snapshot) -> Result<(), HistoryStoreError> {
        self.history.lock().unwrap().add(snapshot);
        self.write()
    }

    async fn get_all_items(&self) -> Vec<Snapshot> {
        self.history.lock().unwrap().items().to_vec()
    }

    async fn get_item_by_id(&self, id: &SnapshotId) -> Option<Snapshot> {
        self.history.lock().unwrap().get(id).cloned()
    }

    async fn search_items(&self, query: &str) -> Vec<Snapshot> {
        self.history.lock().unwrap().search(query)
    }

    async fn delete_item(&self, id: &SnapshotId) -> Result<(), HistoryStoreError> {
        self.history.lock().unwrap().delete(id);
        self.write()
    }

    async fn clear_all(&self) -> Result<(), HistoryStoreError> {
        self.history.lock().unwrap().clear();
        self.write()
    }

    async fn clear_oldest(&self, count: i64) -> Result<(), HistoryStoreError> {
        self.history.lock().unwrap().clear_oldest(count);
        self.write()
    }

    async fn update_last_used(&self, id: &SnapshotId) -> Result<(), HistoryStoreError> {
        self.history.lock().unwrap().touch(id, self.now_ms);
        self.write()
    }

    async fn get_max_items(&self) -> usize {
        self.history.lock().unwrap().max_items()
    }

    async fn set_max_items(&self, max_items: usize) -> Result<(), HistoryStoreError> {
        if max_items == 0 {
            return Err(HistoryStoreError::InvalidCapacity(0));
        }
        self.history.lock().unwrap().set_max_items(max_items);
        self.write()
    }

    async fn flush(&self) -> Result<(), HistoryStoreError> {
        self.write()
    }
}
