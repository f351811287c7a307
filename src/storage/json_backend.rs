use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{domain::Ledger, errors::StorageError};

use super::{LedgerStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// Ledger persisted as a single JSON document: `{ "transactions": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "ledger file missing, starting empty");
            return Ok(Ledger::default());
        }
        load_ledger_from_path(&self.path)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)
    }
}

pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path).map_err(|err| StorageError::read(path, err))?;
    let ledger: Ledger =
        serde_json::from_str(&data).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        transactions = ledger.len(),
        "ledger loaded"
    );
    Ok(ledger)
}

pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    write_atomic(path, json.as_bytes())?;
    tracing::debug!(
        path = %path.display(),
        transactions = ledger.len(),
        "ledger saved"
    );
    Ok(())
}

/// Writes `data` to a sibling temporary file and renames it over `path`, so a
/// reader sees either the old or the new contents. The temporary file is
/// removed when any step fails.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| StorageError::write(parent, err))?;
    }
    let tmp = tmp_path(path);
    let result = stage(&tmp, data).and_then(|()| fs::rename(&tmp, path));
    if let Err(err) = result {
        let _ = fs::remove_file(&tmp);
        tracing::warn!(path = %path.display(), error = %err, "atomic write failed");
        return Err(StorageError::write(path, err));
    }
    Ok(())
}

fn stage(tmp: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(data)?;
    file.flush()?;
    file.sync_all()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Kind, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_in_temp_dir() -> (JsonFileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonFileStore::new(temp.path().join("household_data.json"));
        (store, temp)
    }

    fn sample_ledger() -> Ledger {
        Ledger::new()
            .append(
                Transaction::new(
                    NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
                    Kind::Income,
                    "給料",
                    280000,
                )
                .with_memo("3月分給料"),
            )
            .append(Transaction::new(
                NaiveDate::from_ymd_opt(2023, 3, 5).unwrap(),
                Kind::Expense,
                "食費",
                5000,
            ))
    }

    #[test]
    fn missing_file_loads_as_empty_ledger() {
        let (store, _guard) = store_in_temp_dir();
        let ledger = store.load().expect("load missing file");
        assert!(ledger.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_in_temp_dir();
        let ledger = sample_ledger();
        store.save(&ledger).expect("save ledger");
        let loaded = store.load().expect("load ledger");
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn saved_file_uses_transactions_envelope() {
        let (store, _guard) = store_in_temp_dir();
        store.save(&sample_ledger()).expect("save ledger");
        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value["transactions"][0];
        assert_eq!(first["date"], "2023-03-01");
        assert_eq!(first["kind"], "Income");
        assert_eq!(first["amount"], 280000);
    }

    #[test]
    fn malformed_file_is_reported() {
        let (store, _guard) = store_in_temp_dir();
        fs::write(store.path(), "{ not json").unwrap();
        let err = store.load().expect_err("malformed file must fail");
        assert!(matches!(err, StorageError::Malformed { .. }));
    }

    #[test]
    fn save_leaves_no_temporary_file() {
        let (store, guard) = store_in_temp_dir();
        store.save(&sample_ledger()).expect("save ledger");
        let names: Vec<_> = fs::read_dir(guard.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["household_data.json".to_string()]);
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let path = Path::new("/data/household_data.json");
        assert_eq!(tmp_path(path), PathBuf::from("/data/household_data.json.tmp"));
    }
}
