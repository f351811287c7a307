#![doc(test(attr(deny(warnings))))]

//! Kakeibo records household income and expenses in a single JSON ledger
//! file and derives filtered histories, monthly and per-category summaries,
//! and CSV exports from it.
//!
//! The library is synchronous and single-session: each command loads the
//! ledger, optionally mutates and saves it, then renders. Nothing guards
//! against a second process saving the same file in between.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod export;
pub mod storage;
pub mod utils;

/// Initializes global tracing. Later calls are no-ops.
pub fn init() {
    utils::init_tracing();
}
