//! Clipboard domain models.
//!
//! - [`Snapshot`] answers: **"What was copied, and when?"**
//! - [`ClipboardHistory`] answers: **"Which snapshots are kept, and in what order?"**
mod history;
mod image;
mod preview;
mod snapshot;

pub use history::{ClipboardHistory, DEFAULT_MAX_ITEMS};
pub use image::{decode_png_data_url, encode_png_data_url, PNG_DATA_URL_PREFIX};
pub use preview::{text_preview, DEFAULT_PREVIEW_MAX_CHARS, TRUNCATION_MARKER};
pub use snapshot::{Snapshot, SnapshotError, SnapshotKind};
