//! In-memory stores backing the reporting service.
//!
//! The ledger is append-only: a single append is atomic behind a write
//! lock, and every read works from a point-in-time snapshot taken at
//! query start, so a report can never observe a partially written
//! record or count one twice. Reads run in parallel with each other
//! and with appends; no lock is held across a report computation.

pub mod ledger;
pub mod registry;
pub mod sessions;

pub use ledger::{LedgerError, LedgerStore, NewTransaction, TransactionFilter};
pub use registry::{EntityRegistry, RegistryError};
pub use sessions::{SessionStore, SessionStoreError};
