use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;
use crate::errors::LedgerError;

/// Categories offered for expense entries.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "食費",
    "住居費",
    "光熱費",
    "通信費",
    "交通費",
    "衣類",
    "医療",
    "教育",
    "娯楽",
    "その他",
];

/// Categories offered for income entries.
pub const INCOME_CATEGORIES: &[&str] = &["給料", "ボーナス", "副収入", "その他"];

/// Income or expense classification of a transaction.
///
/// Older ledger files stored the Japanese labels, which are accepted on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    #[serde(alias = "支出")]
    Expense,
    #[serde(alias = "収入")]
    Income,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Expense, Kind::Income];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Expense => "Expense",
            Kind::Income => "Income",
        }
    }

    /// Category list offered by the entry form for this kind. Not enforced by the store.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Kind::Expense => EXPENSE_CATEGORIES,
            Kind::Income => INCOME_CATEGORIES,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Displayable for Kind {
    fn display_label(&self) -> String {
        match self {
            Kind::Expense => "Expense (支出)".into(),
            Kind::Income => "Income (収入)".into(),
        }
    }
}

impl FromStr for Kind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "expense" | "expenses" | "e" | "out" | "支出" => Ok(Kind::Expense),
            "income" | "i" | "in" | "収入" => Ok(Kind::Income),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown kind `{}` (use expense or income)",
                other
            ))),
        }
    }
}

/// One recorded income or expense event.
///
/// Equality covers every field; the sample-data seeding relies on it to skip
/// exact duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(alias = "日付")]
    pub date: NaiveDate,
    #[serde(alias = "カテゴリ")]
    pub category: String,
    #[serde(alias = "タイプ")]
    pub kind: Kind,
    #[serde(alias = "金額")]
    pub amount: u64,
    #[serde(alias = "メモ", default)]
    pub memo: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, kind: Kind, category: impl Into<String>, amount: u64) -> Self {
        Self {
            date,
            category: category.into(),
            kind,
            amount,
            memo: String::new(),
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Entry-time check applied by the presentation layer before anything is
    /// recorded. The store itself accepts zero amounts.
    pub fn validate_entry(&self) -> Result<(), LedgerError> {
        if self.amount == 0 {
            return Err(LedgerError::Validation(
                "amount must be greater than zero".into(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::Validation("category must not be empty".into()));
        }
        Ok(())
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        let mut label = format!(
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        );
        if !self.memo.is_empty() {
            label.push_str(&format!(" ({})", self.memo));
        }
        label
    }
}
