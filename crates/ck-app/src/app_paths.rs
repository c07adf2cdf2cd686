use std::path::PathBuf;

use ck_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub history_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            history_path: dirs.app_data_root.join("clipboard-data.json"),
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/clipkeep"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(
            paths.history_path,
            PathBuf::from("/tmp/clipkeep/clipboard-data.json")
        );
        assert_eq!(paths.config_path, PathBuf::from("/tmp/clipkeep/config.toml"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/clipkeep/logs"));
    }
}
