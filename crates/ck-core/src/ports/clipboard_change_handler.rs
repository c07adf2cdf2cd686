//! Clipboard change handler port
//!
//! The platform watcher (low level) depends on this abstraction; the
//! application layer implements it and decides what a change means.

use anyhow::Result;

use crate::clipboard::Snapshot;

/// Callback handler for clipboard change events.
///
/// The watcher calls this once per observed change with a snapshot it has
/// already built from the clipboard content.
#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    async fn on_clipboard_changed(&self, snapshot: Snapshot) -> Result<()>;
}
