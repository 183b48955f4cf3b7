//! Domain model for the back-office ledger.
//!
//! Transactions are immutable once appended; every derived figure
//! (statuses, outstanding amounts, report totals) is recomputed from
//! these records rather than stored alongside them.

pub mod employee;
pub mod invoice;
pub mod order;
pub mod session;
pub mod transaction;

pub use employee::{Advance, Employee, SalaryRecord};
pub use invoice::{DeliveryStatus, Invoice, InvoiceItem, PaymentStatus};
pub use order::{OrderStatus, ProcurementOrder};
pub use session::{BalanceSession, SessionStatus, SessionSummary};
pub use transaction::{PaymentMethod, Transaction, TransactionType};
