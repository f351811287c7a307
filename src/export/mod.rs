//! CSV rendering of ledger snapshots.

use std::{io, path::Path};

use csv::{Terminator, WriterBuilder};

use crate::{domain::Ledger, errors::LedgerError, storage::write_atomic};

/// Header row, matching the persisted field names.
pub const CSV_HEADER: [&str; 5] = ["date", "category", "kind", "amount", "memo"];

/// Writes `ledger` as CSV with a header row. Fields containing delimiters,
/// quotes or line breaks are quoted and escaped.
pub fn write_csv<W: io::Write>(ledger: &Ledger, writer: W) -> Result<(), LedgerError> {
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for txn in ledger {
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.to_string();
        csv.write_record([
            date.as_str(),
            txn.category.as_str(),
            txn.kind.as_str(),
            amount.as_str(),
            txn.memo.as_str(),
        ])?;
    }
    csv.flush()
        .map_err(|err| LedgerError::Export(err.to_string()))?;
    Ok(())
}

pub fn to_csv_bytes(ledger: &Ledger) -> Result<Vec<u8>, LedgerError> {
    let mut buffer = Vec::new();
    write_csv(ledger, &mut buffer)?;
    Ok(buffer)
}

/// Writes the CSV export to `path`, replacing any existing file atomically.
pub fn export_to_path(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let bytes = to_csv_bytes(ledger)?;
    write_atomic(path, &bytes)?;
    tracing::info!(path = %path.display(), rows = ledger.len(), "csv export written");
    Ok(())
}
