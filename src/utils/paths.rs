use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".kakeibo";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "household_data.json";

pub const HOME_ENV: &str = "KAKEIBO_HOME";
pub const DATA_FILE_ENV: &str = "KAKEIBO_DATA_FILE";

/// Returns the application data directory, defaulting to `~/.kakeibo`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Ledger file used when neither the config nor the environment names one.
pub fn default_data_file_in(base: &Path) -> PathBuf {
    base.join(DATA_FILE)
}

/// Ledger file named by `KAKEIBO_DATA_FILE`, if set.
pub fn data_file_override() -> Option<PathBuf> {
    env::var_os(DATA_FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
