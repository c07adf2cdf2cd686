//! Application root
//!
//! Owns the history store, the core runtime task and the watcher runtime
//! for one process. Nothing is global: everything is created in
//! [`ClipKeepApp::start`] and torn down in [`ClipKeepApp::shutdown`].
//!
//! Writing the history file requires its lock. A daemon that cannot take it
//! refuses to start; a one-shot command that cannot take it runs against a
//! read-only view of the file.

use anyhow::{bail, Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use ck_app::runtime::DEFAULT_REQUEST_BUFFER;
use ck_app::{AppPaths, AppUseCases, CoreHandle, CoreRuntime};
use ck_core::config::AppConfig;
use ck_core::ports::{HistoryStorePort, WatcherControlPort};
use ck_infra::HistoryLock;
use ck_platform::{ClipboardWatcher, PollingClipboardRuntime};

use super::wiring::{resolve_history_path, wire_dependencies};

const OWNED_BY_DAEMON: &str =
    "another clipkeep process owns it (stop `clipkeep run` to change history from the command line)";

/// How the process uses the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Long-running: the watcher captures clipboard changes and copies may
    /// trigger the configured auto-paste.
    Daemon,

    /// A single CLI request; no watcher, no background paste.
    OneShot,
}

pub struct ClipKeepApp {
    handle: CoreHandle,
    watcher: Arc<dyn WatcherControlPort>,
    store: Arc<dyn HistoryStorePort>,
    core_join: JoinHandle<()>,
    history_lock: Option<HistoryLock>,
}

impl ClipKeepApp {
    pub async fn start(config: &AppConfig, paths: &AppPaths, mode: AppMode) -> Result<Self> {
        let history_path = resolve_history_path(config, paths);
        let history_lock = HistoryLock::try_acquire(&history_path)?;

        let read_only = match (&history_lock, mode) {
            (Some(_), _) => None,
            (None, AppMode::Daemon) => bail!(
                "clipboard history {} is in use by another clipkeep process; only one `clipkeep run` may watch the clipboard",
                history_path.display()
            ),
            (None, AppMode::OneShot) => {
                debug!(path = %history_path.display(), "History is locked by another process, opening read-only");
                Some(OWNED_BY_DAEMON.to_string())
            }
        };

        let paste_enabled = mode == AppMode::Daemon && config.paste_enabled;
        let wired = wire_dependencies(config, history_path, read_only, paste_enabled).await;

        let (runtime, handle) =
            CoreRuntime::new(AppUseCases::new(wired.deps), DEFAULT_REQUEST_BUFFER);
        let core_join = tokio::spawn(runtime.run());

        let watcher = Arc::new(ClipboardWatcher::new(
            wired.clipboard,
            Arc::new(handle.clone()),
            wired.clock,
            config.preview_max_chars,
        ));
        let watcher: Arc<dyn WatcherControlPort> = Arc::new(PollingClipboardRuntime::new(
            watcher,
            Duration::from_millis(config.poll_interval_ms),
        ));

        if mode == AppMode::Daemon {
            watcher
                .start_watcher()
                .await
                .context("failed to start clipboard watcher")?;
        }

        info!(?mode, "ClipKeep started");
        Ok(Self {
            handle,
            watcher,
            store: wired.store,
            core_join,
            history_lock,
        })
    }

    pub fn handle(&self) -> &CoreHandle {
        &self.handle
    }

    pub fn watcher(&self) -> &Arc<dyn WatcherControlPort> {
        &self.watcher
    }

    /// Whether this process may write the history file.
    pub fn owns_history(&self) -> bool {
        self.history_lock.is_some()
    }

    /// Stop the watcher, drain and stop the core loop, flush the store, then
    /// release the history lock.
    pub async fn shutdown(self) -> Result<()> {
        if let Err(err) = self.watcher.stop_watcher().await {
            warn!(error = %err, "Failed to stop clipboard watcher");
        }

        self.handle.shutdown().await;
        if let Err(err) = self.core_join.await {
            warn!(error = %err, "Core runtime task ended abnormally");
        }

        self.store
            .flush()
            .await
            .context("failed to flush clipboard history")?;
        drop(self.history_lock);

        info!("ClipKeep stopped");
        Ok(())
    }
}
