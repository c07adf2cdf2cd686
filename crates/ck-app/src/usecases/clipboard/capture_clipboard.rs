use std::sync::Arc;
use tracing::{debug, warn};

use ck_core::ports::{HistoryStoreError, HistoryStorePort};
use ck_core::Snapshot;

/// Record a snapshot observed by the watcher.
///
/// 记录监控器捕获的剪贴板快照。
pub struct CaptureClipboardUseCase {
    store: Arc<dyn HistoryStorePort>,
}

impl CaptureClipboardUseCase {
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(
        name = "usecase.capture_clipboard.execute",
        skip(self, snapshot),
        fields(kind = %snapshot.kind, id = %snapshot.id)
    )]
    pub async fn execute(&self, snapshot: Snapshot) -> Result<(), HistoryStoreError> {
        if !snapshot.is_valid() {
            warn!("Ignoring clipboard snapshot with empty content");
            return Ok(());
        }

        self.store.add_item(snapshot).await?;
        debug!("Clipboard snapshot captured");
        Ok(())
    }
}
