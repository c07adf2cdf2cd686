//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (history file store, clock) / 创建 infra 层具体实现
//! - ✅ Create platform implementations (clipboard, paste) / 创建 platform 层具体实现
//! - ✅ Group them into `AppDeps` / 将依赖打包为 `AppDeps`
//!
//! This is the only place that depends on ck-infra, ck-platform and ck-app
//! together, and it only assembles.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ck_app::{AppDeps, AppPaths};
use ck_core::config::AppConfig;
use ck_core::ports::{ClockPort, HistoryStorePort, PasteSimulatorPort, SystemClipboardPort};
use ck_infra::{FileHistoryStore, SystemClock};
use ck_platform::{SystemClipboard, XdotoolPasteSimulator};

/// Concrete adapters wired for one process.
pub struct WiredDeps {
    pub deps: AppDeps,
    pub store: Arc<dyn HistoryStorePort>,
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub clock: Arc<dyn ClockPort>,
}

/// The history document this process works on.
pub fn resolve_history_path(config: &AppConfig, paths: &AppPaths) -> PathBuf {
    config
        .history_path_override()
        .cloned()
        .unwrap_or_else(|| paths.history_path.clone())
}

/// Build the adapters from configuration.
///
/// `paste_enabled` is decided by the caller so one-shot commands can paste
/// inline instead of in the background. `read_only` carries the reason when
/// another process owns the history file.
pub async fn wire_dependencies(
    config: &AppConfig,
    history_path: PathBuf,
    read_only: Option<String>,
    paste_enabled: bool,
) -> WiredDeps {
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    let store = match read_only {
        None => FileHistoryStore::open(history_path, config.default_max_items, clock.clone()).await,
        Some(reason) => {
            FileHistoryStore::open_read_only(
                history_path,
                config.default_max_items,
                clock.clone(),
                reason,
            )
            .await
        }
    };
    let store: Arc<dyn HistoryStorePort> = Arc::new(store);

    let clipboard: Arc<dyn SystemClipboardPort> = Arc::new(SystemClipboard::new());

    let paste = paste_enabled.then(|| paste_simulator(config));

    WiredDeps {
        deps: AppDeps {
            store: store.clone(),
            clipboard: clipboard.clone(),
            paste,
        },
        store,
        clipboard,
        clock,
    }
}

pub fn paste_simulator(config: &AppConfig) -> Arc<dyn PasteSimulatorPort> {
    Arc::new(XdotoolPasteSimulator::new(Duration::from_millis(
        config.paste_delay_ms,
    )))
}
