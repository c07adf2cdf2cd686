//! Clipboard watcher
//!
//! Compares the system clipboard with the last observed value and hands
//! every change to a [`ClipboardChangeHandler`] as a ready-made [`Snapshot`].
//!
//! ```text
//! System clipboard
//!      ↓
//! SystemClipboardPort
//!      ↓
//! ClipboardWatcher   (this module, one check per tick)
//!      ↓
//! ClipboardChangeHandler
//!      ↓
//! Core runtime → History store
//! ```
//!
//! ## Change detection
//!
//! The last observed clipboard is remembered as a (text, image) pair. A tick
//! emits at most one snapshot: the text if it changed, otherwise the image
//! if it changed. Both halves of the pair are updated on every successful
//! tick, so a clipboard holding text and an image at once settles after one
//! capture instead of flipping between them. The watcher makes no storage
//! decisions; deduplication beyond "same as last tick" belongs to the
//! history.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use ck_core::ports::{ClipboardChangeHandler, ClockPort, SystemClipboardPort};
use ck_core::{Snapshot, SnapshotKind};

#[derive(Default)]
struct Observed {
    last_text: Option<String>,
    last_image: Option<String>,
    last_captured_at: i64,
}

pub struct ClipboardWatcher {
    clipboard: Arc<dyn SystemClipboardPort>,
    handler: Arc<dyn ClipboardChangeHandler>,
    clock: Arc<dyn ClockPort>,
    preview_max_chars: usize,
    observed: Mutex<Observed>,
}

impl ClipboardWatcher {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        handler: Arc<dyn ClipboardChangeHandler>,
        clock: Arc<dyn ClockPort>,
        preview_max_chars: usize,
    ) -> Self {
        Self {
            clipboard,
            handler,
            clock,
            preview_max_chars,
            observed: Mutex::new(Observed::default()),
        }
    }

    /// Record what is already on the clipboard as seen, so it is not
    /// captured as a new entry when watching starts.
    pub async fn prime(&self) {
        let current = self
            .clipboard
            .read_text()
            .and_then(|text| Ok((text, self.clipboard.read_image()?)));

        match current {
            Ok((text, image)) => {
                debug!(
                    has_text = text.is_some(),
                    has_image = image.is_some(),
                    "Clipboard watcher primed"
                );
                let mut observed = self.observed.lock().await;
                observed.last_text = text;
                observed.last_image = image;
            }
            Err(err) => warn!(error = %format!("{err:#}"), "Failed to prime clipboard watcher"),
        }
    }

    /// Check the clipboard once and emit at most one snapshot.
    ///
    /// Returns the kind of the emitted snapshot, or `None` when nothing
    /// changed. A read failure is returned to the caller and leaves the last
    /// observed value untouched.
    pub async fn check_once(&self) -> Result<Option<SnapshotKind>> {
        let text = self.clipboard.read_text()?;
        let image = self.clipboard.read_image()?;

        let mut observed = self.observed.lock().await;

        let snapshot = match (&text, &image) {
            (Some(t), _) if observed.last_text.as_ref() != Some(t) => {
                let captured_at = Self::next_timestamp(&mut observed, self.clock.now_ms());
                Some(Snapshot::text(t.clone(), captured_at, self.preview_max_chars)?)
            }
            (_, Some(url)) if observed.last_image.as_ref() != Some(url) => {
                let captured_at = Self::next_timestamp(&mut observed, self.clock.now_ms());
                Some(Snapshot::image(url.clone(), captured_at)?)
            }
            _ => None,
        };

        observed.last_text = text;
        observed.last_image = image;
        drop(observed);

        let Some(snapshot) = snapshot else {
            return Ok(None);
        };
        let kind = snapshot.kind;
        self.emit(snapshot).await;
        Ok(Some(kind))
    }

    // captured_at never goes backwards, even if the wall clock does
    fn next_timestamp(observed: &mut Observed, now_ms: i64) -> i64 {
        let ts = now_ms.max(observed.last_captured_at);
        observed.last_captured_at = ts;
        ts
    }

    async fn emit(&self, snapshot: Snapshot) {
        let kind = snapshot.kind;
        if let Err(err) = self.handler.on_clipboard_changed(snapshot).await {
            warn!(%kind, error = %format!("{err:#}"), "Clipboard change handler failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use ck_core::clipboard::encode_png_data_url;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct FakeClipboard {
        text: StdMutex<Option<String>>,
        image: StdMutex<Option<String>>,
        fail_reads: AtomicBool,
    }

    impl FakeClipboard {
        fn set_text(&self, text: Option<&str>) {
            *self.text.lock().unwrap() = text.map(str::to_string);
        }

        fn set_image(&self, image: Option<String>) {
            *self.image.lock().unwrap() = image;
        }
    }

    impl SystemClipboardPort for FakeClipboard {
        fn read_text(&self) -> Result<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(anyhow!("clipboard busy"));
            }
            Ok(self.text.lock().unwrap().clone())
        }

        fn read_image(&self) -> Result<Option<String>> {
            Ok(self.image.lock().unwrap().clone())
        }

        fn write_text(&self, text: &str) -> Result<()> {
            self.set_text(Some(text));
            Ok(())
        }

        fn write_image(&self, data_url: &str) -> Result<()> {
            self.set_image(Some(data_url.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingHandler(StdMutex<Vec<Snapshot>>);

    #[async_trait::async_trait]
    impl ClipboardChangeHandler for RecordingHandler {
        async fn on_clipboard_changed(&self, snapshot: Snapshot) -> Result<()> {
            self.0.lock().unwrap().push(snapshot);
            Ok(())
        }
    }

    struct ManualClock(AtomicI64);

    impl ClockPort for ManualClock {
        fn now_ms(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    struct Fixture {
        clipboard: Arc<FakeClipboard>,
        handler: Arc<RecordingHandler>,
        clock: Arc<ManualClock>,
        watcher: ClipboardWatcher,
    }

    fn fixture() -> Fixture {
        let clipboard = Arc::new(FakeClipboard::default());
        let handler = Arc::new(RecordingHandler::default());
        let clock = Arc::new(ManualClock(AtomicI64::new(1_000)));
        let watcher = ClipboardWatcher::new(clipboard.clone(), handler.clone(), clock.clone(), 100);
        Fixture {
            clipboard,
            handler,
            clock,
            watcher,
        }
    }

    impl Fixture {
        fn emitted(&self) -> Vec<Snapshot> {
            self.handler.0.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn new_text_is_emitted_once() {
        let f = fixture();
        f.clipboard.set_text(Some("hello\n  world"));

        assert_eq!(f.watcher.check_once().await.unwrap(), Some(SnapshotKind::Text));
        assert_eq!(f.watcher.check_once().await.unwrap(), None);

        let emitted = f.emitted();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].content, "hello\n  world");
        assert_eq!(emitted[0].preview.as_deref(), Some("hello world"));
        assert_eq!(emitted[0].captured_at, 1_000);
    }

    #[tokio::test]
    async fn text_wins_over_image_on_same_tick() {
        let f = fixture();
        f.clipboard.set_text(Some("caption"));
        f.clipboard.set_image(Some(encode_png_data_url(b"pixels")));

        assert_eq!(f.watcher.check_once().await.unwrap(), Some(SnapshotKind::Text));
        assert_eq!(f.emitted().len(), 1);
    }

    #[tokio::test]
    async fn text_and_image_together_settle_after_one_capture() {
        let f = fixture();
        f.clipboard.set_text(Some("caption"));
        f.clipboard.set_image(Some(encode_png_data_url(b"pixels")));

        let mut kinds = Vec::new();
        for _ in 0..6 {
            kinds.push(f.watcher.check_once().await.unwrap());
        }

        assert_eq!(kinds[0], Some(SnapshotKind::Text));
        assert!(kinds[1..].iter().all(Option::is_none), "{kinds:?}");
        assert_eq!(f.emitted().len(), 1);
    }

    #[tokio::test]
    async fn new_image_under_unchanged_text_is_captured() {
        let f = fixture();
        f.clipboard.set_text(Some("caption"));
        f.watcher.check_once().await.unwrap();

        f.clipboard.set_image(Some(encode_png_data_url(b"pixels")));
        assert_eq!(f.watcher.check_once().await.unwrap(), Some(SnapshotKind::Image));
        assert_eq!(f.watcher.check_once().await.unwrap(), None);
    }

    #[tokio::test]
    async fn recopying_an_image_after_text_is_a_change() {
        let f = fixture();
        let url = encode_png_data_url(b"pixels");

        f.clipboard.set_image(Some(url.clone()));
        f.watcher.check_once().await.unwrap();

        f.clipboard.set_image(None);
        f.clipboard.set_text(Some("between"));
        f.watcher.check_once().await.unwrap();

        f.clipboard.set_text(None);
        f.clipboard.set_image(Some(url));
        assert_eq!(f.watcher.check_once().await.unwrap(), Some(SnapshotKind::Image));

        let kinds: Vec<_> = f.emitted().into_iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SnapshotKind::Image, SnapshotKind::Text, SnapshotKind::Image]
        );
    }

    #[tokio::test]
    async fn image_is_emitted_when_no_text() {
        let f = fixture();
        let url = encode_png_data_url(b"pixels");
        f.clipboard.set_image(Some(url.clone()));

        assert_eq!(f.watcher.check_once().await.unwrap(), Some(SnapshotKind::Image));
        assert_eq!(f.watcher.check_once().await.unwrap(), None);

        let emitted = f.emitted();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].content, url);
        assert!(emitted[0].preview.is_none());
    }

    #[tokio::test]
    async fn empty_clipboard_emits_nothing() {
        let f = fixture();
        assert_eq!(f.watcher.check_once().await.unwrap(), None);
        assert!(f.emitted().is_empty());
    }

    #[tokio::test]
    async fn primed_text_is_not_captured() {
        let f = fixture();
        f.clipboard.set_text(Some("already there"));

        f.watcher.prime().await;

        assert_eq!(f.watcher.check_once().await.unwrap(), None);

        f.clipboard.set_text(Some("fresh"));
        assert_eq!(f.watcher.check_once().await.unwrap(), Some(SnapshotKind::Text));
    }

    #[tokio::test]
    async fn primed_image_is_not_captured() {
        let f = fixture();
        f.clipboard.set_image(Some(encode_png_data_url(b"pixels")));

        f.watcher.prime().await;

        assert_eq!(f.watcher.check_once().await.unwrap(), None);
        assert!(f.emitted().is_empty());
    }

    #[tokio::test]
    async fn returning_to_earlier_content_is_a_change() {
        let f = fixture();
        f.clipboard.set_text(Some("a"));
        f.watcher.check_once().await.unwrap();
        f.clipboard.set_text(Some("b"));
        f.watcher.check_once().await.unwrap();
        f.clipboard.set_text(Some("a"));
        f.watcher.check_once().await.unwrap();

        let contents: Vec<_> = f.emitted().into_iter().map(|s| s.content).collect();
        assert_eq!(contents, vec!["a", "b", "a"]);
    }

    #[tokio::test]
    async fn read_error_is_returned_and_state_kept() {
        let f = fixture();
        f.clipboard.set_text(Some("a"));
        f.watcher.check_once().await.unwrap();

        f.clipboard.fail_reads.store(true, Ordering::SeqCst);
        assert!(f.watcher.check_once().await.is_err());

        f.clipboard.fail_reads.store(false, Ordering::SeqCst);
        assert_eq!(f.watcher.check_once().await.unwrap(), None);
    }

    #[tokio::test]
    async fn captured_at_never_decreases() {
        let f = fixture();
        f.clipboard.set_text(Some("first"));
        f.watcher.check_once().await.unwrap();

        f.clock.0.store(500, Ordering::SeqCst);
        f.clipboard.set_text(Some("second"));
        f.watcher.check_once().await.unwrap();

        let emitted = f.emitted();
        assert_eq!(emitted[0].captured_at, 1_000);
        assert_eq!(emitted[1].captured_at, 1_000);
    }
}
