//! Orchestration layer: snapshot, filter, aggregate.
//!
//! Services take point-in-time store snapshots, resolve the requested
//! window, and run the pure aggregation functions, bounding each
//! computation with the configured timeout. Routes stay thin.

pub mod report_service;
pub mod session_service;
