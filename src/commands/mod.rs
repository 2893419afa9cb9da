//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckOutcome, CheckResult, check_word};
pub use simple::{SimpleCommand, run_simple};
