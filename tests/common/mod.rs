#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use kakeibo::{
    domain::{Kind, Ledger, Transaction},
    storage::JsonFileStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Store backed by `household_data.json` in a fresh directory.
pub fn setup_store() -> (JsonFileStore, PathBuf) {
    let path = temp_base().join("household_data.json");
    (JsonFileStore::new(path.clone()), path)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn expense(day: NaiveDate, category: &str, amount: u64) -> Transaction {
    Transaction::new(day, Kind::Expense, category, amount)
}

pub fn income(day: NaiveDate, category: &str, amount: u64) -> Transaction {
    Transaction::new(day, Kind::Income, category, amount)
}

/// The two-entry ledger used by the balance scenarios.
pub fn salary_and_groceries() -> Ledger {
    Ledger::new()
        .append(income(date(2023, 3, 1), "給料", 280_000))
        .append(expense(date(2023, 3, 5), "食費", 5_000))
}
