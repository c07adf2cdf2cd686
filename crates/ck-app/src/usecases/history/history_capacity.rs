use std::sync::Arc;

use ck_core::ports::{HistoryStoreError, HistoryStorePort};

/// Read or change the history capacity bound.
pub struct HistoryCapacityUseCase {
    store: Arc<dyn HistoryStorePort>,
}

impl HistoryCapacityUseCase {
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> usize {
        self.store.get_max_items().await
    }

    #[tracing::instrument(name = "usecase.history_capacity.set", skip(self))]
    pub async fn set(&self, max_items: usize) -> Result<(), HistoryStoreError> {
        self.store.set_max_items(max_items).await
    }
}
