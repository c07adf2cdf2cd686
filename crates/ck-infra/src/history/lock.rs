use anyhow::{Context, Result};
use fs4::fs_std::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::document::with_suffix;

/// Exclusive advisory lock on `<history file>.lock`.
///
/// 历史文件的单写者锁。
///
/// Only the holder may write the history file. The OS drops the lock when
/// the process exits, so a crash never leaves a stale lock behind.
pub struct HistoryLock {
    file: File,
    path: PathBuf,
}

impl HistoryLock {
    pub fn lock_path(history_path: &Path) -> PathBuf {
        with_suffix(history_path, ".lock")
    }

    /// Take the lock for `history_path` without blocking.
    ///
    /// Returns `Ok(None)` when another process (or another handle in this
    /// one) already holds it.
    pub fn try_acquire(history_path: &Path) -> Result<Option<Self>> {
        let path = Self::lock_path(history_path);

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("create history dir failed: {}", dir.display()))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("open history lock failed: {}", path.display()))?;

        let acquired = file
            .try_lock_exclusive()
            .with_context(|| format!("lock history failed: {}", path.display()))?;
        if !acquired {
            debug!(path = %path.display(), "History lock is held elsewhere");
            return Ok(None);
        }

        debug!(path = %path.display(), "History lock acquired");
        Ok(Some(Self { file, path }))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for HistoryLock {
    fn drop(&mut self) {
        if let Err(err) = FileExt::unlock(&self.file) {
            warn!(path = %self.path.display(), error = %err, "Failed to release history lock");
        }
    }
}
