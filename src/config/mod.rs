use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::{core::utils, domain::CategorySet, utils::atomic::write_atomic};

/// Starter categories offered before the user records any of their own.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Utilities", "Transport", "Entertainment"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Configuration at {path} is invalid: {message}")]
    Invalid { path: PathBuf, message: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("unknown config key `{0}` (use currency_symbol or default_categories)")]
    UnknownKey(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub default_categories: Vec<String>,
    pub currency_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_categories: DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect(),
            currency_symbol: "$".into(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_category_set(&self) -> CategorySet {
        CategorySet::from_names(self.default_categories.iter().cloned())
    }

    /// Directory holding the ledger records, honouring `data_dir` when set.
    pub fn resolve_data_dir(&self, home: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| utils::data_dir_in(home))
    }

    /// Updates a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "currency_symbol" | "currency-symbol" => {
                self.currency_symbol = value.trim().to_string();
            }
            "default_categories" | "default-categories" => {
                self.default_categories = CategorySet::from_names(value.split(','))
                    .as_slice()
                    .to_vec();
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

/// Loads and stores [`Config`] as JSON inside the application home directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_home_dir(&utils::app_home_dir())
    }

    pub fn with_home_dir(home: &Path) -> Self {
        Self {
            path: utils::config_file_in(home),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data).map_err(|err| ConfigError::Invalid {
                path: self.path.clone(),
                message: err.to_string(),
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes the config through a synced staging file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
