//! Employee salary and advance records.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One monthly salary entry.
///
/// `paid_at = None` means the salary is still owed: it appears in
/// outstanding views but never in disbursed totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub month: NaiveDate,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

/// An ad-hoc draw against future salary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advance {
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    /// Monthly base salary.
    pub salary: Decimal,
    pub salaries: Vec<SalaryRecord>,
    pub advances: Vec<Advance>,
}

impl Employee {
    /// Total of salary records not yet paid out.
    pub fn unpaid_salaries(&self) -> Decimal {
        self.salaries
            .iter()
            .filter(|s| s.paid_at.is_none())
            .map(|s| s.amount)
            .sum()
    }

    /// Total of salary records actually disbursed.
    pub fn paid_salaries(&self) -> Decimal {
        self.salaries
            .iter()
            .filter(|s| s.paid_at.is_some())
            .map(|s| s.amount)
            .sum()
    }

    /// Total of advances not yet settled against a salary. These are
    /// money the business has already handed out and expects back.
    pub fn outstanding_advances(&self) -> Decimal {
        self.advances
            .iter()
            .filter(|a| a.paid_at.is_none())
            .map(|a| a.amount)
            .sum()
    }
}
