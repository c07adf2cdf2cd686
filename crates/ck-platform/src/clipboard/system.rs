use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use std::sync::Mutex;

use ck_core::ports::SystemClipboardPort;

use super::common::CommonClipboardImpl;

/// The OS clipboard through `clipboard-rs`.
///
/// 系统剪贴板适配器。
///
/// The context is opened on first use, so commands that never touch the
/// clipboard also work without a display connection.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<ClipboardContext>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_ctx<T>(&self, f: impl FnOnce(&ClipboardContext) -> Result<T>) -> Result<T> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;

        if guard.is_none() {
            let context = ClipboardContext::new()
                .map_err(|e| anyhow!("failed to open system clipboard: {e}"))?;
            *guard = Some(context);
        }

        match guard.as_ref() {
            Some(ctx) => f(ctx),
            None => Err(anyhow!("system clipboard unavailable")),
        }
    }
}

impl SystemClipboardPort for SystemClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        self.with_ctx(CommonClipboardImpl::read_text)
    }

    fn read_image(&self) -> Result<Option<String>> {
        self.with_ctx(CommonClipboardImpl::read_image)
    }

    fn write_text(&self, text: &str) -> Result<()> {
        self.with_ctx(|ctx| CommonClipboardImpl::write_text(ctx, text))
    }

    fn write_image(&self, data_url: &str) -> Result<()> {
        self.with_ctx(|ctx| CommonClipboardImpl::write_image(ctx, data_url))
    }
}
