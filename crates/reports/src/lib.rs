//! Tallybank Reports - balance statistics
//!
//! Descriptive reductions over the current account set. These are
//! read-only views with no state-machine concerns; an empty account set
//! yields no report rather than a numeric result.

pub mod balance;
pub mod exporters;

pub use balance::BalanceReport;
pub use exporters::to_json;
