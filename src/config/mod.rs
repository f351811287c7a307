use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    domain::{Kind, LookbackPeriod},
    errors::{LedgerError, StorageError},
    storage::write_atomic,
    utils::paths,
};

/// User preferences persisted next to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    pub currency_suffix: String,
    pub default_period: LookbackPeriod,
    pub default_breakdown: Kind,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            currency_suffix: "円".into(),
            default_period: LookbackPeriod::AllTime,
            default_breakdown: Kind::Expense,
            plain_output: false,
        }
    }
}

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "data-file",
    "currency",
    "period",
    "breakdown",
    "plain",
];

impl Config {
    /// Updates one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LedgerError> {
        match key {
            "data-file" | "data_file" => {
                self.data_file = if value.trim().is_empty() || value == "default" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "currency" | "currency_suffix" => self.currency_suffix = value.to_string(),
            "period" | "default_period" => self.default_period = value.parse()?,
            "breakdown" | "default_breakdown" => self.default_breakdown = value.parse()?,
            "plain" | "plain_output" => {
                self.plain_output = parse_bool(value).ok_or_else(|| {
                    LedgerError::Config(format!("expected true or false, got `{}`", value))
                })?;
            }
            other => {
                return Err(LedgerError::Config(format!(
                    "unknown key `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Loads and saves [`Config`] under the application directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        paths::ensure_dir(&base).map_err(|err| StorageError::write(&base, err))?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data =
            fs::read_to_string(&self.path).map_err(|err| StorageError::read(&self.path, err))?;
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("invalid `{}`: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| LedgerError::Config(err.to_string()))?;
        write_atomic(&self.path, json.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    /// Ledger file to use: `KAKEIBO_DATA_FILE`, then the configured path
    /// (relative paths resolve against the application directory), then the
    /// default file.
    pub fn data_file(&self, config: &Config) -> PathBuf {
        if let Some(path) = paths::data_file_override() {
            return path;
        }
        match &config.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.base.join(path),
            None => paths::default_data_file_in(&self.base),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
