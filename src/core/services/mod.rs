pub mod sample_data;
pub mod summary_service;
pub mod transaction_service;

pub use sample_data::sample_transactions;
pub use summary_service::{CategoryRow, MonthlyRow, SummaryService, Totals};
pub use transaction_service::{TransactionFilter, TransactionService};
