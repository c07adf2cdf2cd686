//! File-backed clipboard history.
//!
//! `document` owns the on-disk JSON shape and atomic writes; `store` wraps it
//! with the in-memory [`ck_core::ClipboardHistory`] behind a lock. `lock`
//! keeps a second process from writing the same file.

mod document;
mod lock;
mod store;

pub use document::{HistoryDocument, HistoryFileRepository, HISTORY_FILE_NAME};
pub use lock::HistoryLock;
pub use store::FileHistoryStore;
