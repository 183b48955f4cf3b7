//! Registries for invoice, order, and employee snapshots.
//!
//! These hold the source documents that ledger transactions reference.
//! Reads take the same snapshot-at-query-start view as the ledger.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Advance, Employee, Invoice, ProcurementOrder, SalaryRecord};

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("invoice paidAmount ({paid}) exceeds total ({total})")]
    PaidExceedsTotal { paid: String, total: String },

    #[error("amount must be non-negative")]
    NegativeAmount,

    #[error("duplicate document number: {0}")]
    DuplicateNumber(String),

    #[error("employee not found: {0}")]
    EmployeeNotFound(Uuid),
}

#[derive(Default)]
pub struct EntityRegistry {
    invoices: RwLock<Vec<Invoice>>,
    orders: RwLock<Vec<ProcurementOrder>>,
    employees: RwLock<Vec<Employee>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an invoice. Enforces `paid_amount <= total` so the
    /// derived receivable can never go negative.
    pub async fn register_invoice(&self, invoice: Invoice) -> Result<Uuid, RegistryError> {
        if invoice.total.is_sign_negative() || invoice.paid_amount.is_sign_negative() {
            return Err(RegistryError::NegativeAmount);
        }
        if invoice.paid_amount > invoice.total {
            return Err(RegistryError::PaidExceedsTotal {
                paid: invoice.paid_amount.to_string(),
                total: invoice.total.to_string(),
            });
        }

        let mut guard = self.invoices.write().await;
        if guard.iter().any(|i| i.number == invoice.number) {
            return Err(RegistryError::DuplicateNumber(invoice.number));
        }
        let id = invoice.id;
        guard.push(invoice);
        Ok(id)
    }

    pub async fn register_order(&self, order: ProcurementOrder) -> Result<Uuid, RegistryError> {
        if order.total.is_sign_negative() || order.paid.is_sign_negative() {
            return Err(RegistryError::NegativeAmount);
        }

        let mut guard = self.orders.write().await;
        if guard.iter().any(|o| o.number == order.number) {
            return Err(RegistryError::DuplicateNumber(order.number));
        }
        let id = order.id;
        guard.push(order);
        Ok(id)
    }

    pub async fn register_employee(&self, employee: Employee) -> Result<Uuid, RegistryError> {
        if employee.salary.is_sign_negative() {
            return Err(RegistryError::NegativeAmount);
        }
        let id = employee.id;
        self.employees.write().await.push(employee);
        Ok(id)
    }

    /// Record a monthly salary entry for an employee. Unpaid entries
    /// (`paid_at = None`) count toward outstanding views until settled.
    pub async fn add_salary_record(
        &self,
        employee_id: Uuid,
        record: SalaryRecord,
    ) -> Result<Employee, RegistryError> {
        if record.amount.is_sign_negative() {
            return Err(RegistryError::NegativeAmount);
        }
        let mut guard = self.employees.write().await;
        let employee = guard
            .iter_mut()
            .find(|e| e.id == employee_id)
            .ok_or(RegistryError::EmployeeNotFound(employee_id))?;
        employee.salaries.push(record);
        Ok(employee.clone())
    }

    /// Record an advance handed out to an employee.
    pub async fn add_advance(
        &self,
        employee_id: Uuid,
        advance: Advance,
    ) -> Result<Employee, RegistryError> {
        if advance.amount.is_sign_negative() {
            return Err(RegistryError::NegativeAmount);
        }
        let mut guard = self.employees.write().await;
        let employee = guard
            .iter_mut()
            .find(|e| e.id == employee_id)
            .ok_or(RegistryError::EmployeeNotFound(employee_id))?;
        employee.advances.push(advance);
        Ok(employee.clone())
    }

    pub async fn invoices(&self) -> Arc<[Invoice]> {
        Arc::from(self.invoices.read().await.as_slice())
    }

    pub async fn orders(&self) -> Arc<[ProcurementOrder]> {
        Arc::from(self.orders.read().await.as_slice())
    }

    pub async fn employees(&self) -> Arc<[Employee]> {
        Arc::from(self.employees.read().await.as_slice())
    }
}
