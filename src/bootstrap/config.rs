//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! Defaults for missing keys live in `AppConfig::from_toml`, not here.

use anyhow::Context;
use std::path::{Path, PathBuf};

use ck_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Resolve the configuration for this run.
///
/// An explicitly requested file must exist. The default location is
/// optional: when it is absent every setting takes its default value.
pub fn resolve_config(explicit: Option<&Path>, default_path: &Path) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path.to_path_buf());
    }

    if default_path.exists() {
        load_config(default_path.to_path_buf())
    } else {
        Ok(AppConfig::default())
    }
}
