use anyhow::{anyhow, Result};
use clipboard_rs::{common::RustImage, Clipboard, ClipboardContext, ContentFormat, RustImageData};

use ck_core::clipboard::{decode_png_data_url, encode_png_data_url};

pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl CommonClipboardImpl {
    /// Text currently on the clipboard. Empty text counts as none.
    pub fn read_text(ctx: &ClipboardContext) -> Result<Option<String>> {
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }

        let text = map_clipboard_err(ctx.get_text())?;
        Ok(Some(text).filter(|t| !t.is_empty()))
    }

    /// Image currently on the clipboard, re-encoded as a PNG data URL.
    pub fn read_image(ctx: &ClipboardContext) -> Result<Option<String>> {
        if !ctx.has(ContentFormat::Image) {
            return Ok(None);
        }

        let image = map_clipboard_err(ctx.get_image())?;
        let png = map_clipboard_err(image.to_png())?;
        let bytes = png.get_bytes();
        if bytes.is_empty() {
            return Ok(None);
        }

        Ok(Some(encode_png_data_url(bytes)))
    }

    pub fn write_text(ctx: &ClipboardContext, text: &str) -> Result<()> {
        map_clipboard_err(ctx.set_text(text.to_string()))
    }

    pub fn write_image(ctx: &ClipboardContext, data_url: &str) -> Result<()> {
        let bytes = decode_png_data_url(data_url)?;
        let image = map_clipboard_err(RustImageData::from_bytes(&bytes))?;
        map_clipboard_err(ctx.set_image(image))
    }
}
