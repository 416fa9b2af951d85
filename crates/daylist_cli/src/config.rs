//! Runtime settings resolved from flags and platform directories.

use crate::cli::Cli;
use daylist_core::{default_log_level, DEFAULT_STORAGE_KEY};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "daylist.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Always absolute.
    pub log_dir: PathBuf,
    pub log_level: String,
    pub storage_key: String,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let data_dir = default_data_dir();
        Self {
            db_path: cli
                .db
                .clone()
                .unwrap_or_else(|| data_dir.join(DB_FILE_NAME)),
            log_dir: absolute(cli.log_dir.as_deref().unwrap_or(&data_dir.join("logs"))),
            log_level: cli
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            storage_key: cli
                .storage_key
                .clone()
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
        }
    }
}

fn default_data_dir() -> PathBuf {
    match ProjectDirs::from("", "", "daylist") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => absolute(Path::new(".daylist")),
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::cli::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "daylist",
            "--db",
            "/tmp/tasks.sqlite3",
            "--log-dir",
            "/tmp/daylist-logs",
            "--log-level",
            "warn",
            "--storage-key",
            "work",
            "dates",
        ]);
        let config = AppConfig::from_cli(&cli);
        assert_eq!(config.db_path, PathBuf::from("/tmp/tasks.sqlite3"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/daylist-logs"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.storage_key, "work");
    }

    #[test]
    fn defaults_are_absolute_and_use_default_key() {
        let cli = Cli::parse_from(["daylist", "list"]);
        let config = AppConfig::from_cli(&cli);
        assert!(config.log_dir.is_absolute());
        assert!(config.db_path.ends_with("daylist.sqlite3"));
        assert_eq!(config.storage_key, daylist_core::DEFAULT_STORAGE_KEY);
    }
}
