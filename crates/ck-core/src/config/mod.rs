//! # Configuration DTO / 配置数据
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! Missing keys resolve to the documented defaults. Values are not range
//! checked here; the runtime clamps what it must.

use std::path::PathBuf;

use crate::clipboard::{DEFAULT_MAX_ITEMS, DEFAULT_PREVIEW_MAX_CHARS};

/// Default clipboard poll interval.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Default delay between writing the clipboard and simulating a paste.
pub const DEFAULT_PASTE_DELAY_MS: u64 = 150;

/// Application configuration DTO
/// 应用配置 DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Clipboard poll interval in milliseconds
    pub poll_interval_ms: u64,

    /// Maximum preview length (characters) of text snapshots
    pub preview_max_chars: usize,

    /// Capacity bound used when no persisted value exists yet
    pub default_max_items: usize,

    /// Explicit history document path (empty = application data dir)
    pub history_path: PathBuf,

    /// Simulate a paste keystroke after copying an entry back
    pub paste_enabled: bool,

    /// Delay before the simulated paste, in milliseconds
    pub paste_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            preview_max_chars: DEFAULT_PREVIEW_MAX_CHARS,
            default_max_items: DEFAULT_MAX_ITEMS,
            history_path: PathBuf::new(),
            paste_enabled: false,
            paste_delay_ms: DEFAULT_PASTE_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let int = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .filter(|v| *v >= 0)
        };

        Ok(Self {
            poll_interval_ms: int("watcher", "poll_interval_ms")
                .map(|v| v as u64)
                .unwrap_or(defaults.poll_interval_ms),
            preview_max_chars: int("watcher", "preview_max_chars")
                .map(|v| v as usize)
                .unwrap_or(defaults.preview_max_chars),
            default_max_items: int("history", "max_items")
                .map(|v| v as usize)
                .unwrap_or(defaults.default_max_items),
            history_path: PathBuf::from(
                toml_value
                    .get("history")
                    .and_then(|s| s.get("path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            paste_enabled: toml_value
                .get("paste")
                .and_then(|p| p.get("enabled"))
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.paste_enabled),
            paste_delay_ms: int("paste", "delay_ms")
                .map(|v| v as u64)
                .unwrap_or(defaults.paste_delay_ms),
        })
    }

    /// The history document path, if one was configured explicitly.
    pub fn history_path_override(&self) -> Option<&PathBuf> {
        if self.history_path.as_os_str().is_empty() {
            None
        } else {
            Some(&self.history_path)
        }
    }
}
