pub mod json_backend;

use crate::{domain::Ledger, errors::StorageError};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Persistence backend holding the complete ledger.
///
/// Every save overwrites the whole ledger. Backends do not lock: when two
/// load-mutate-save cycles overlap, the later save wins and the other update
/// is lost. Only a single active session is supported.
pub trait LedgerStore {
    /// Reads the persisted ledger, returning an empty one when nothing has
    /// been saved yet.
    fn load(&self) -> Result<Ledger>;

    /// Replaces the persisted ledger. On failure the previous state stays
    /// readable.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub use json_backend::{load_ledger_from_path, save_ledger_to_path, write_atomic, JsonFileStore};
