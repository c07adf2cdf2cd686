//! # ck-platform
//!
//! Platform-specific implementations for ClipKeep.
//!
//! This crate contains the adapters that touch the operating system: the
//! system clipboard, application directories, the paste keystroke simulator
//! and the polling clipboard watcher runtime.

pub mod app_dirs;
pub mod clipboard;
pub mod paste;
pub mod runtime;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::SystemClipboard;
pub use paste::XdotoolPasteSimulator;
pub use runtime::clipboard::{ClipboardWatcher, PollingClipboardRuntime};
