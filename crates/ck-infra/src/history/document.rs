use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use ck_core::Snapshot;

/// File name of the persisted history inside the application data dir.
pub const HISTORY_FILE_NAME: &str = "clipboard-data.json";

/// On-disk shape of the history: the ordered items plus the capacity bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default)]
    pub items: Vec<Snapshot>,

    /// `None` when the document predates the field; the caller picks a default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

/// Reads and atomically writes the [`HistoryDocument`] at one path.
pub struct HistoryFileRepository {
    path: PathBuf,
}

impl HistoryFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document.
    ///
    /// Returns `Ok(None)` when the file does not exist. An unreadable or
    /// malformed file is an error; deciding what to do about it is left to
    /// the caller.
    pub async fn load(&self) -> Result<Option<HistoryDocument>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read history failed: {}", self.path.display()))
            }
        };

        let document: HistoryDocument = serde_json::from_str(&content)
            .with_context(|| format!("parse history failed: {}", self.path.display()))?;

        Ok(Some(document))
    }

    /// Whether anything is present at the path (readable or not).
    pub async fn exists(&self) -> bool {
        fs::metadata(&self.path).await.is_ok()
    }

    /// Move the current file aside as `<file>.corrupt-<stamp>` so a later
    /// save cannot overwrite it. Returns where it went.
    pub async fn quarantine(&self, stamp: i64) -> Result<PathBuf> {
        let target = with_suffix(&self.path, &format!(".corrupt-{stamp}"));
        fs::rename(&self.path, &target).await.with_context(|| {
            format!(
                "move unreadable history aside failed: {} -> {}",
                self.path.display(),
                target.display()
            )
        })?;
        Ok(target)
    }

    pub async fn save(&self, document: &HistoryDocument) -> Result<()> {
        let content = serde_json::to_string(document).context("serialize history failed")?;
        self.atomic_write(&content).await
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .await
                    .with_context(|| format!("create history dir failed: {}", dir.display()))?;
            }
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the target, so a crash
    /// mid-write leaves either the old or the new document.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp history failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp history to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

/// `path` with `suffix` appended to the file name (`a.json` → `a.json.lock`).
pub(crate) fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
