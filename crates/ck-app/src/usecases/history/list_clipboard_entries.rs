use std::sync::Arc;

use ck_core::ports::HistoryStorePort;
use ck_core::{Snapshot, SnapshotId};

/// Whole history, most recent first.
pub struct ListClipboardEntries {
    store: Arc<dyn HistoryStorePort>,
}

impl ListClipboardEntries {
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.list_clipboard_entries.execute", skip(self))]
    pub async fn execute(&self) -> Vec<Snapshot> {
        self.store.get_all_items().await
    }
}

/// Case-insensitive text search over the history.
pub struct SearchClipboardEntries {
    store: Arc<dyn HistoryStorePort>,
}

impl SearchClipboardEntries {
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.search_clipboard_entries.execute", skip(self))]
    pub async fn execute(&self, query: &str) -> Vec<Snapshot> {
        self.store.search_items(query).await
    }
}

pub struct GetClipboardEntry {
    store: Arc<dyn HistoryStorePort>,
}

impl GetClipboardEntry {
    pub fn new(store: Arc<dyn HistoryStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.get_clipboard_entry.execute", skip(self), fields(id = %id))]
    pub async fn execute(&self, id: &SnapshotId) -> Option<Snapshot> {
        self.store.get_item_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::InMemoryStore;

    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::with_items(
            10,
            &[("a", "Alpha"), ("b", "beta"), ("c", "ALPHABET")],
        ))
    }

    #[tokio::test]
    async fn list_returns_most_recent_first() {
        let items = ListClipboardEntries::new(store()).execute().await;
        let contents: Vec<_> = items.into_iter().map(|i| i.content).collect();
        assert_eq!(contents, vec!["ALPHABET", "beta", "Alpha"]);
    }

    #[tokio::test]
    async fn search_matches_ignoring_case() {
        let uc = SearchClipboardEntries::new(store());

        let found: Vec<_> = uc
            .execute("alpha")
            .await
            .into_iter()
            .map(|i| i.content)
            .collect();
        assert_eq!(found, vec!["ALPHABET", "Alpha"]);
        assert_eq!(uc.execute("").await.len(), 3);
        assert!(uc.execute("gamma").await.is_empty());
    }

    #[tokio::test]
    async fn get_by_id() {
        let uc = GetClipboardEntry::new(store());

        assert_eq!(
            uc.execute(&SnapshotId::from("b")).await.map(|i| i.content),
            Some("beta".to_string())
        );
        assert!(uc.execute(&SnapshotId::from("zzz")).await.is_none());
    }
}
