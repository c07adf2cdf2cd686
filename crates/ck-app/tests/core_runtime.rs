//! Core runtime driven through its handle, backed by the real file store.

use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::sync::broadcast;

use ck_app::{AppDeps, AppUseCases, CoreError, CoreHandle, CoreNotification, CoreRuntime};
use ck_core::ports::{ClipboardChangeHandler, HistoryStorePort, SystemClipboardPort};
use ck_core::{Snapshot, SnapshotKind};
use ck_infra::{FileHistoryStore, SystemClock};

#[derive(Default)]
struct FakeClipboard {
    written: Mutex<Vec<(SnapshotKind, String)>>,
    broken: bool,
}

impl SystemClipboardPort for FakeClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn read_image(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        if self.broken {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.written
            .lock()
            .unwrap()
            .push((SnapshotKind::Text, text.to_string()));
        Ok(())
    }

    fn write_image(&self, data_url: &str) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((SnapshotKind::Image, data_url.to_string()));
        Ok(())
    }
}

struct Harness {
    _dir: TempDir,
    store: Arc<FileHistoryStore>,
    clipboard: Arc<FakeClipboard>,
    handle: CoreHandle,
    join: tokio::task::JoinHandle<()>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn harness_with(max_items: usize, clipboard: FakeClipboard) -> Harness {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let store = Arc::new(
        FileHistoryStore::open(
            dir.path().join("clipboard-data.json"),
            max_items,
            Arc::new(SystemClock),
        )
        .await,
    );
    let clipboard = Arc::new(clipboard);

    let usecases = AppUseCases::new(AppDeps {
        store: store.clone(),
        clipboard: clipboard.clone(),
        paste: None,
    });
    let (runtime, handle) = CoreRuntime::new(usecases, 16);
    let join = tokio::spawn(runtime.run());

    Harness {
        _dir: dir,
        store,
        clipboard,
        handle,
        join,
    }
}

async fn harness(max_items: usize) -> Harness {
    harness_with(max_items, FakeClipboard::default()).await
}

fn text(content: &str) -> Snapshot {
    Snapshot::text(content, 1, 100).unwrap()
}

fn contents(items: &[Snapshot]) -> Vec<&str> {
    items.iter().map(|i| i.content.as_str()).collect()
}

async fn next_update(rx: &mut broadcast::Receiver<CoreNotification>) -> Vec<Snapshot> {
    match rx.recv().await.unwrap() {
        CoreNotification::ClipboardUpdated { items } => items,
        other => panic!("unexpected notification: {other:?}"),
    }
}

#[tokio::test]
async fn watcher_capture_pushes_updated_history() {
    let h = harness(500).await;
    let mut rx = h.handle.subscribe();

    let handler: Arc<dyn ClipboardChangeHandler> = Arc::new(h.handle.clone());
    handler.on_clipboard_changed(text("apple")).await.unwrap();
    handler.on_clipboard_changed(text("banana")).await.unwrap();

    assert_eq!(contents(&next_update(&mut rx).await), vec!["apple"]);
    assert_eq!(contents(&next_update(&mut rx).await), vec!["banana", "apple"]);
}

#[tokio::test]
async fn clear_all_is_never_observed_stale() {
    let h = harness(500).await;
    for c in ["a", "b", "c"] {
        h.handle.capture(text(c)).await.unwrap();
    }

    let clearing = h.handle.clone();
    let reading = h.handle.clone();
    let (cleared, _) = tokio::join!(clearing.clear_all(), async {
        // queued behind the clear or ahead of it, never in between
        reading.get_all_items().await
    });
    cleared.unwrap();

    assert!(h.handle.get_all_items().await.unwrap().is_empty());
    assert!(h.store.get_all_items().await.is_empty());
}

#[tokio::test]
async fn maintenance_requests_follow_store_semantics() {
    let h = harness(500).await;
    for c in ["a", "b", "c", "d"] {
        h.handle.capture(text(c)).await.unwrap();
    }

    h.handle.clear_oldest(0).await.unwrap();
    h.handle.clear_oldest(1).await.unwrap();
    assert_eq!(
        contents(&h.handle.get_all_items().await.unwrap()),
        vec!["d", "c", "b"]
    );

    let c = h.handle.search_items("C").await.unwrap();
    assert_eq!(contents(&c), vec!["c"]);

    h.handle.delete_item(c[0].id.clone()).await.unwrap();
    h.handle.delete_item(c[0].id.clone()).await.unwrap();
    assert_eq!(contents(&h.handle.get_all_items().await.unwrap()), vec!["d", "b"]);

    h.handle.set_max_items(1).await.unwrap();
    assert_eq!(h.handle.get_max_items().await.unwrap(), 1);
    assert_eq!(contents(&h.handle.get_all_items().await.unwrap()), vec!["d"]);
}

#[tokio::test]
async fn copy_writes_clipboard_and_touch_records_use() {
    let h = harness(500).await;
    h.handle.capture(text("reuse me")).await.unwrap();
    let item = h.handle.get_all_items().await.unwrap().remove(0);

    h.handle
        .copy_to_clipboard(item.kind, item.content.clone())
        .await
        .unwrap();
    h.handle.update_last_used(item.id.clone()).await.unwrap();

    assert_eq!(
        *h.clipboard.written.lock().unwrap(),
        vec![(SnapshotKind::Text, "reuse me".to_string())]
    );
    let touched = h.handle.get_item_by_id(item.id).await.unwrap().unwrap();
    assert!(touched.last_used_at.is_some());
}

#[tokio::test]
async fn failures_are_replied_and_broadcast() {
    let h = harness_with(
        500,
        FakeClipboard {
            broken: true,
            ..Default::default()
        },
    )
    .await;
    let mut rx = h.handle.subscribe();

    let err = h.handle.set_max_items(0).await.unwrap_err();
    assert!(matches!(err, CoreError::Store(_)));
    match rx.recv().await.unwrap() {
        CoreNotification::OperationFailed { operation, .. } => {
            assert_eq!(operation, "set_max_items")
        }
        other => panic!("unexpected notification: {other:?}"),
    }

    let err = h
        .handle
        .copy_to_clipboard(SnapshotKind::Text, "x")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Clipboard(_)));
    match rx.recv().await.unwrap() {
        CoreNotification::OperationFailed { operation, message } => {
            assert_eq!(operation, "copy_to_clipboard");
            assert!(message.contains("clipboard unavailable"));
        }
        other => panic!("unexpected notification: {other:?}"),
    }
}

#[tokio::test]
async fn requests_after_shutdown_report_stopped() {
    let h = harness(500).await;

    h.handle.shutdown().await;
    h.join.await.unwrap();

    assert!(matches!(
        h.handle.get_all_items().await,
        Err(CoreError::RuntimeStopped)
    ));
}
