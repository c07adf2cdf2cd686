use std::path::PathBuf;

/// Resolved application directories.
///
/// 已解析的应用目录（纯数据）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
