//! Sales invoice snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How much of an invoice has been settled.
///
/// Never stored: recomputed from amounts on every read so the status
/// cannot drift from the figures it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Credit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Pending,
    Delivered,
    Returned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

/// A sales invoice as the ledger sees it.
///
/// Invariant: `paid_amount <= total`, enforced at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub number: String,
    pub customer: String,
    pub total: Decimal,
    pub paid_amount: Decimal,
    pub delivery_status: DeliveryStatus,
    pub items: Vec<InvoiceItem>,
    pub date: DateTime<Utc>,
}

impl Invoice {
    /// Derive payment status from amounts.
    ///
    /// PAID ⇔ paid == total, CREDIT ⇔ paid == 0, otherwise PARTIAL.
    pub fn payment_status(&self) -> PaymentStatus {
        if self.paid_amount == self.total {
            PaymentStatus::Paid
        } else if self.paid_amount.is_zero() {
            PaymentStatus::Credit
        } else {
            PaymentStatus::Partial
        }
    }

    /// Amount the customer still owes. Never negative.
    pub fn receivable(&self) -> Decimal {
        self.total - self.paid_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(total: i64, paid: i64) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            number: "INV-1".to_string(),
            customer: "customer".to_string(),
            total: Decimal::from(total),
            paid_amount: Decimal::from(paid),
            delivery_status: DeliveryStatus::Delivered,
            items: vec![],
            date: Utc::now(),
        }
    }

    #[test]
    fn test_status_derivation() {
        assert_eq!(invoice(500, 500).payment_status(), PaymentStatus::Paid);
        assert_eq!(invoice(500, 0).payment_status(), PaymentStatus::Credit);
        assert_eq!(invoice(500, 200).payment_status(), PaymentStatus::Partial);
    }

    #[test]
    fn test_receivable() {
        assert_eq!(invoice(500, 200).receivable(), Decimal::from(300));
        assert_eq!(invoice(500, 500).receivable(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_total_invoice_is_paid() {
        // A zero-total invoice has nothing outstanding.
        assert_eq!(invoice(0, 0).payment_status(), PaymentStatus::Paid);
    }
}
