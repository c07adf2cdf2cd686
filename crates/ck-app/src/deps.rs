//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for building the use cases. Not a builder: no
//! defaults, no hidden logic.

use std::sync::Arc;

use ck_core::ports::{HistoryStorePort, PasteSimulatorPort, SystemClipboardPort};

pub struct AppDeps {
    pub store: Arc<dyn HistoryStorePort>,
    pub clipboard: Arc<dyn SystemClipboardPort>,

    /// `None` disables the simulated paste after a copy.
    pub paste: Option<Arc<dyn PasteSimulatorPort>>,
}
