//! Lifecycle of the polling clipboard runtime against in-memory ports.

use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ck_core::ports::{ClipboardChangeHandler, ClockPort, SystemClipboardPort, WatcherControlPort};
use ck_core::Snapshot;
use ck_platform::{ClipboardWatcher, PollingClipboardRuntime};

#[derive(Default)]
struct InMemoryClipboard {
    text: Mutex<Option<String>>,
    text_reads: AtomicUsize,
}

impl InMemoryClipboard {
    fn copy(&self, text: &str) {
        *self.text.lock().unwrap() = Some(text.to_string());
    }
}

impl SystemClipboardPort for InMemoryClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        self.text_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.lock().unwrap().clone())
    }

    fn read_image(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        self.copy(text);
        Ok(())
    }

    fn write_image(&self, _data_url: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct Collector(Mutex<Vec<String>>);

#[async_trait::async_trait]
impl ClipboardChangeHandler for Collector {
    async fn on_clipboard_changed(&self, snapshot: Snapshot) -> Result<()> {
        self.0.lock().unwrap().push(snapshot.content);
        Ok(())
    }
}

struct ZeroClock;

impl ClockPort for ZeroClock {
    fn now_ms(&self) -> i64 {
        0
    }
}

fn runtime(
    clipboard: Arc<InMemoryClipboard>,
    collector: Arc<Collector>,
) -> PollingClipboardRuntime {
    let watcher = Arc::new(ClipboardWatcher::new(
        clipboard,
        collector,
        Arc::new(ZeroClock),
        100,
    ));
    PollingClipboardRuntime::new(watcher, Duration::from_millis(100))
}

#[tokio::test(start_paused = true)]
async fn captures_changes_while_running_and_stops_cleanly() {
    let clipboard = Arc::new(InMemoryClipboard::default());
    let collector = Arc::new(Collector::default());
    clipboard.copy("on startup");

    let runtime = runtime(clipboard.clone(), collector.clone());
    runtime.start_watcher().await.unwrap();
    assert!(runtime.is_running());

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(collector.0.lock().unwrap().is_empty(), "startup content is primed");

    clipboard.copy("copied later");
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(*collector.0.lock().unwrap(), vec!["copied later".to_string()]);

    runtime.stop_watcher().await.unwrap();
    assert!(!runtime.is_running());

    clipboard.copy("after stop");
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(collector.0.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn second_start_does_not_add_a_timer() {
    let clipboard = Arc::new(InMemoryClipboard::default());
    let collector = Arc::new(Collector::default());
    let runtime = runtime(clipboard.clone(), collector);

    runtime.start_watcher().await.unwrap();
    runtime.start_watcher().await.unwrap();

    // one prime read, then one read per tick at t = 0, 100, ..., 1000
    tokio::time::sleep(Duration::from_millis(1_050)).await;
    let reads = clipboard.text_reads.load(Ordering::SeqCst);
    assert!(reads <= 12, "expected a single timer, saw {reads} reads");

    runtime.stop_watcher().await.unwrap();
    runtime.stop_watcher().await.unwrap();
    assert!(!runtime.is_running());
}
