use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

/// Ordered collection of every recorded transaction, in append order.
///
/// Transactions carry no identifier, so equal entries are indistinguishable
/// and the only supported removal is [`Ledger::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Returns the ledger with `transaction` added at the end. Amounts are not
    /// checked here; entry validation belongs to the caller.
    pub fn append(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Returns an empty ledger.
    pub fn clear(self) -> Self {
        Self::default()
    }

    pub fn contains(&self, transaction: &Transaction) -> bool {
        self.transactions.contains(transaction)
    }

    /// Appends every candidate that is not already present, comparing all
    /// fields. Candidates added earlier in the same batch count as present.
    /// Returns the updated ledger and how many candidates were added.
    pub fn merge_unique<I>(mut self, candidates: I) -> (Self, usize)
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut added = 0;
        for candidate in candidates {
            if self.contains(&candidate) {
                continue;
            }
            self.transactions.push(candidate);
            added += 1;
        }
        (self, added)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().map(|txn| txn.date).min()
    }

    /// Category names in first-seen order, each listed once.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for txn in &self.transactions {
            if !seen.iter().any(|name| name == &txn.category) {
                seen.push(txn.category.clone());
            }
        }
        seen
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
