//! Business logic helpers for recording and selecting transactions.

use std::collections::HashSet;

use crate::core::services::sample_data::sample_transactions;
use crate::domain::{DateRange, Kind, Ledger, Transaction};
use crate::errors::LedgerError;

/// Selection criteria for history and analysis views.
///
/// An absent or empty set means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kinds: Option<HashSet<Kind>>,
    pub categories: Option<HashSet<String>>,
    pub date_range: Option<DateRange>,
}

impl TransactionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_kinds<I: IntoIterator<Item = Kind>>(mut self, kinds: I) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        let kind_ok = match &self.kinds {
            Some(kinds) if !kinds.is_empty() => kinds.contains(&txn.kind),
            _ => true,
        };
        let category_ok = match &self.categories {
            Some(categories) if !categories.is_empty() => categories.contains(&txn.category),
            _ => true,
        };
        let date_ok = self
            .date_range
            .map(|range| range.contains(txn.date))
            .unwrap_or(true);
        kind_ok && category_ok && date_ok
    }
}

/// Stateless helpers that derive or extend ledger snapshots.
pub struct TransactionService;

impl TransactionService {
    /// Keeps the transactions matching `filter`, preserving input order.
    pub fn filter(ledger: &Ledger, filter: &TransactionFilter) -> Ledger {
        ledger
            .iter()
            .filter(|txn| filter.matches(txn))
            .cloned()
            .collect()
    }

    /// Newest first; entries on the same date keep their recorded order.
    pub fn sorted_for_history(ledger: &Ledger) -> Ledger {
        let mut transactions = ledger.transactions.clone();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ledger::from_transactions(transactions)
    }

    /// Validates an entry and appends it. Nothing is appended when validation fails.
    pub fn record(ledger: Ledger, transaction: Transaction) -> Result<Ledger, LedgerError> {
        transaction.validate_entry()?;
        tracing::info!(
            date = %transaction.date,
            kind = %transaction.kind,
            category = %transaction.category,
            amount = transaction.amount,
            "transaction recorded"
        );
        Ok(ledger.append(transaction))
    }

    /// Adds the sample entries that are not already present.
    pub fn seed_samples(ledger: Ledger) -> (Ledger, usize) {
        let (ledger, added) = ledger.merge_unique(sample_transactions());
        tracing::info!(added, "sample data merged");
        (ledger, added)
    }
}
