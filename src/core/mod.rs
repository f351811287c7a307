//! Query, aggregation and mutation helpers over ledger snapshots.

pub mod clock;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
