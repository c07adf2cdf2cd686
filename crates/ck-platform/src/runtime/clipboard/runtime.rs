//! Polling clipboard runtime.
//!
//! Owns the lifecycle (start/stop) of one background task that drives a
//! [`ClipboardWatcher`] on a `tokio::time::interval`.

use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{info, warn};

use ck_core::ports::{WatcherControlError, WatcherControlPort};

use super::ClipboardWatcher;

pub struct PollingClipboardRuntime {
    watcher: Arc<ClipboardWatcher>,
    poll_interval: Duration,
    running: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PollingClipboardRuntime {
    pub fn new(watcher: Arc<ClipboardWatcher>, poll_interval: Duration) -> Self {
        Self {
            watcher,
            // a zero period would panic inside `interval`
            poll_interval: poll_interval.max(Duration::from_millis(1)),
            running: AtomicBool::new(false),
            handle: Mutex::new(None),
        }
    }
}

#[async_trait]
impl WatcherControlPort for PollingClipboardRuntime {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(()); // 幂等
        }

        // held until the task handle is stored so a concurrent stop waits for it
        let mut slot = self.handle.lock().await;

        self.watcher.prime().await;

        let watcher = self.watcher.clone();
        let period = self.poll_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if let Err(err) = watcher.check_once().await {
                    warn!(error = %format!("{err:#}"), "clipboard check failed");
                }
            }
        });

        *slot = Some(handle);
        info!(poll_interval_ms = period.as_millis() as u64, "Clipboard watcher started");

        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        if !self.running.swap(false, Ordering::AcqRel) {
            return Ok(());
        }

        if let Some(handle) = self.handle.lock().await.take() {
            handle.abort(); // polling 是可直接 abort 的
        }
        info!("Clipboard watcher stopped");

        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}
