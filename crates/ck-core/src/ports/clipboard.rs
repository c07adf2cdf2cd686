//! System clipboard port
//!
//! Abstracts the OS clipboard. Images cross this boundary as
//! `data:image/png;base64,` URLs so the core never touches raw bitmaps.

use anyhow::Result;

pub trait SystemClipboardPort: Send + Sync {
    /// Current text on the clipboard, `None` when it holds no text.
    fn read_text(&self) -> Result<Option<String>>;

    /// Current image on the clipboard as a PNG data URL, `None` when it holds
    /// no image.
    fn read_image(&self) -> Result<Option<String>>;

    fn write_text(&self, text: &str) -> Result<()>;

    /// Write a PNG data URL back to the clipboard as an image.
    fn write_image(&self, data_url: &str) -> Result<()>;
}
