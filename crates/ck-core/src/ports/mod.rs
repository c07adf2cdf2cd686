//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and the infrastructure / platform implementations. The core stays free
//! of clipboard libraries, file systems and process spawning.

pub mod app_dirs;
mod clipboard;
mod clipboard_change_handler;
mod clock;
pub mod errors;
pub mod history_store;
mod paste;
pub mod watcher_control;

pub use app_dirs::AppDirsPort;
pub use clipboard::SystemClipboardPort;
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use clock::*;
pub use errors::AppDirsError;
pub use history_store::{HistoryStoreError, HistoryStorePort};
pub use paste::PasteSimulatorPort;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
