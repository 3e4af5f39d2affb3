use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".ledger_view";
const DATA_DIR: &str = "data";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the application home directory.
pub const HOME_ENV: &str = "LEDGER_VIEW_HOME";

/// Returns the application-specific home directory, defaulting to `~/.ledger_view`.
pub fn app_home_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the `entries` and `categories` records.
pub fn data_dir_in(home: &std::path::Path) -> PathBuf {
    home.join(DATA_DIR)
}

pub fn config_file_in(home: &std::path::Path) -> PathBuf {
    home.join(CONFIG_DIR).join(CONFIG_FILE)
}
