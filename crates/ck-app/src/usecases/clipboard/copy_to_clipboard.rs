use anyhow::{bail, Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use ck_core::ports::{PasteSimulatorPort, SystemClipboardPort};
use ck_core::SnapshotKind;

/// Put a history entry back on the system clipboard.
///
/// 将历史条目写回系统剪贴板。
///
/// Not a history mutation: the watcher sees the write like any other copy
/// and the history moves the entry to the front through normal dedup.
pub struct CopyToClipboardUseCase {
    clipboard: Arc<dyn SystemClipboardPort>,
    paste: Option<Arc<dyn PasteSimulatorPort>>,
}

impl CopyToClipboardUseCase {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        paste: Option<Arc<dyn PasteSimulatorPort>>,
    ) -> Self {
        Self { clipboard, paste }
    }

    #[tracing::instrument(
        name = "usecase.copy_to_clipboard.execute",
        skip(self, content),
        fields(kind = %kind, len = content.len())
    )]
    pub fn execute(&self, kind: SnapshotKind, content: &str) -> Result<()> {
        if content.is_empty() {
            bail!("refusing to copy empty content");
        }

        match kind {
            SnapshotKind::Text => self
                .clipboard
                .write_text(content)
                .context("write text to clipboard failed")?,
            SnapshotKind::Image => self
                .clipboard
                .write_image(content)
                .context("write image to clipboard failed")?,
        }

        info!("Entry copied to clipboard");
        Ok(())
    }

    pub fn paste_enabled(&self) -> bool {
        self.paste.is_some()
    }

    /// Best-effort paste into the focused window. Failures are only logged.
    pub async fn simulate_paste(&self) {
        let Some(paste) = &self.paste else {
            return;
        };

        if let Err(err) = paste.simulate_paste().await {
            warn!(error = %format!("{err:#}"), "Simulated paste failed");
        }
    }
}
