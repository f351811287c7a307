mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::{date, expense, salary_and_groceries, setup_store};
use kakeibo::{
    domain::{Kind, Ledger},
    errors::StorageError,
    storage::{load_ledger_from_path, LedgerStore},
};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn save_then_load_returns_equal_ledger() {
    let (store, _path) = setup_store();
    let ledger = salary_and_groceries()
        .append(expense(date(2023, 3, 20), "光熱費", 12_000).with_memo("電気, \"ガス\""));
    store.save(&ledger).expect("save");
    assert_eq!(store.load().expect("load"), ledger);
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let (store, path) = setup_store();
    store.save(&salary_and_groceries()).expect("initial save");
    let original = fs::read_to_string(&path).expect("read original file");

    // A directory at the temp-file name makes staging fail.
    fs::create_dir_all(tmp_path_for(&path)).unwrap();

    let grown = salary_and_groceries().append(expense(date(2023, 3, 10), "住居費", 80_000));
    let result = store.save(&grown);
    assert!(matches!(result, Err(StorageError::Write { .. })), "{result:?}");

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(current, original);
    assert_eq!(store.load().unwrap().len(), 2);
}

#[test]
fn legacy_japanese_keys_load() {
    let (store, path) = setup_store();
    fs::write(
        &path,
        r#"{"transactions":[
            {"日付":"2023-03-01","カテゴリ":"給料","タイプ":"収入","金額":280000,"メモ":"3月分給料"},
            {"日付":"2023-03-05","カテゴリ":"食費","タイプ":"支出","金額":5000}
        ]}"#,
    )
    .unwrap();

    let ledger = store.load().expect("legacy file loads");
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.transactions[0].kind, Kind::Income);
    assert_eq!(ledger.transactions[1].memo, "");

    // Saving rewrites the file with the current field names.
    store.save(&ledger).unwrap();
    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"category\""));
    assert!(!json.contains("カテゴリ"));
}

#[test]
fn missing_file_is_an_empty_ledger() {
    let (store, path) = setup_store();
    assert!(!path.exists());
    assert_eq!(store.load().unwrap(), Ledger::new());
}

#[test]
fn corrupt_file_is_reported_with_its_path() {
    let (_store, path) = setup_store();
    fs::write(&path, "{ not json").unwrap();
    match load_ledger_from_path(&path) {
        Err(StorageError::Malformed { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected malformed error, got {other:?}"),
    }
}
