use std::sync::Arc;
use tracing::info;

use ck_core::ports::{HistoryStoreError, HistoryStorePort};
use ck_core::SnapshotId;

/// Use case for deleting one clipboard entry.
/// 删除单个剪贴板条目的用例。
///
/// Deleting an id that is not in the history succeeds and changes nothing.
pub struct DeleteClipboardEntry {
    store: Arc<dyn HistoryStorePort>,
}

impl DeleteClipboardEntry {
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(
        name = "usecase.delete_clipboard_entry.execute",
        skip(self),
        fields(entry_id = %entry_id)
    )]
    pub async fn execute(&self, entry_id: &SnapshotId) -> Result<(), HistoryStoreError> {
        self.store.delete_item(entry_id).await?;
        info!("Deleted clipboard entry");
        Ok(())
    }
}
