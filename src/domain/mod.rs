pub mod common;
pub mod ledger;
pub mod period;
pub mod transaction;

pub use common::Displayable;
pub use ledger::Ledger;
pub use period::{DateRange, LookbackPeriod, YearMonth};
pub use transaction::{Kind, Transaction, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
