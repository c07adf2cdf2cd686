use std::sync::Arc;

use ck_core::ports::{HistoryStoreError, HistoryStorePort};
use ck_core::SnapshotId;

/// Update clipboard entry last-used time.
///
/// 更新剪贴板条目的最近使用时间。
pub struct TouchClipboardEntryUseCase {
    store: Arc<dyn HistoryStorePort>,
}

impl TouchClipboardEntryUseCase {
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.touch_clipboard_entry.execute", skip(self), fields(id = %id))]
    pub async fn execute(&self, id: &SnapshotId) -> Result<(), HistoryStoreError> {
        self.store.update_last_used(id).await
    }
}
