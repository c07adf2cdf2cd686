use std::sync::Arc;
use tracing::info;

use ck_core::ports::{HistoryStoreError, HistoryStorePort};

/// Destructive history maintenance.
///
/// Callers are expected to have asked the user for confirmation first.
pub struct ClearHistoryUseCase {
    store: Arc<dyn HistoryStorePort>,
}

impl ClearHistoryUseCase {
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.clear_history.all", skip(self))]
    pub async fn clear_all(&self) -> Result<(), HistoryStoreError> {
        self.store.clear_all().await?;
        info!("Clipboard history cleared");
        Ok(())
    }

    /// Drop the `count` oldest entries; `count <= 0` does nothing.
    #[tracing::instrument(name = "usecase.clear_history.oldest", skip(self))]
    pub async fn clear_oldest(&self, count: i64) -> Result<(), HistoryStoreError> {
        if count <= 0 {
            return Ok(());
        }
        self.store.clear_oldest(count).await
    }
}
