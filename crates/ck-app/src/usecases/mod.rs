//! Business logic use cases
//!
//! ```text
//! ClipboardWatcher
//!        ↓
//! CaptureClipboardUseCase            → history store
//! ---------------------------------
//! ListClipboardEntries / Search / Get → presentation
//! ---------------------------------
//! CopyToClipboardUseCase             → system clipboard (+ paste)
//! TouchClipboardEntryUseCase         → last used
//! Delete / Clear / Capacity          → history maintenance
//! ```

pub mod clipboard;
pub mod history;

#[cfg(test)]
pub(crate) mod test_support;

pub use clipboard::{CaptureClipboardUseCase, CopyToClipboardUseCase, TouchClipboardEntryUseCase};
pub use history::{
    ClearHistoryUseCase, DeleteClipboardEntry, GetClipboardEntry, HistoryCapacityUseCase,
    ListClipboardEntries, SearchClipboardEntries,
};
