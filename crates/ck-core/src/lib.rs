//! # ck-core
//!
//! Core domain models and business logic for ClipKeep.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the clipboard snapshot model, the history policy (deduplication, capacity,
//! search) and the ports implemented by the infrastructure and platform crates.

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardHistory, Snapshot, SnapshotError, SnapshotKind};
pub use config::AppConfig;
pub use ids::SnapshotId;
