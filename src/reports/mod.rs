//! Aggregation engine: pure, deterministic transforms from ledger
//! snapshots (plus invoice/order snapshots) into named report figures.
//!
//! Every function here takes immutable slices and a date window and
//! returns a fixed-shape summary. No I/O, no side effects: computing a
//! report twice over the same snapshot yields identical output.

pub mod assets_liabilities;
pub mod balance;
pub mod bank;
pub mod commissions;
pub mod daily;
pub mod liquid_cash;
pub mod outstanding;
pub mod parties;
pub mod period;

pub use period::{DateRange, Granularity, PeriodError};
