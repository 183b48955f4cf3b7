//! Entity registration and listing: invoices, orders, employees.
//!
//! These write paths exist so the service is operable end to end; the
//! registered documents are what the report layer aggregates.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{
    Advance, DeliveryStatus, Employee, Invoice, InvoiceItem, OrderStatus, ProcurementOrder,
    SalaryRecord,
};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

fn page<T: Clone>(items: &[T], params: &ListParams) -> Vec<T> {
    items
        .iter()
        .skip(params.offset.unwrap_or(0))
        .take(params.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

/// Handler for GET /api/sales/invoices?limit&offset
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    let invoices = state.registry.invoices().await;
    Ok(Json(page(&invoices, &params)))
}

/// Handler for GET /api/procurement/orders?limit&offset
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProcurementOrder>>, ApiError> {
    let orders = state.registry.orders().await;
    Ok(Json(page(&orders, &params)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub number: String,
    pub customer: String,
    pub total: Decimal,
    #[serde(default)]
    pub paid_amount: Decimal,
    pub delivery_status: Option<DeliveryStatus>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    pub date: Option<DateTime<Utc>>,
}

/// Handler for POST /api/sales/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    let invoice = Invoice {
        id: Uuid::new_v4(),
        number: request.number,
        customer: request.customer,
        total: request.total,
        paid_amount: request.paid_amount,
        delivery_status: request.delivery_status.unwrap_or(DeliveryStatus::Pending),
        items: request.items,
        date: request.date.unwrap_or_else(Utc::now),
    };
    state.registry.register_invoice(invoice.clone()).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub number: String,
    pub supplier: String,
    pub total: Decimal,
    #[serde(default)]
    pub paid: Decimal,
    pub status: Option<OrderStatus>,
    pub date: Option<DateTime<Utc>>,
}

/// Handler for POST /api/procurement/orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ProcurementOrder>), ApiError> {
    let order = ProcurementOrder {
        id: Uuid::new_v4(),
        number: request.number,
        supplier: request.supplier,
        total: request.total,
        paid: request.paid,
        status: request.status.unwrap_or(OrderStatus::Created),
        date: request.date.unwrap_or_else(Utc::now),
    };
    state.registry.register_order(order.clone()).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub salary: Decimal,
}

/// Handler for POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("name cannot be empty".to_string()));
    }
    let employee = Employee {
        id: Uuid::new_v4(),
        name: request.name,
        salary: request.salary,
        salaries: vec![],
        advances: vec![],
    };
    state.registry.register_employee(employee.clone()).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /api/employees?limit&offset
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.registry.employees().await;
    Ok(Json(page(&employees, &params)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSalaryRequest {
    pub month: NaiveDate,
    pub amount: Decimal,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Handler for POST /api/employees/{id}/salaries
///
/// Records a monthly salary entry. Entries without paidAt stay in
/// outstanding views until settled.
pub async fn add_salary_record(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(request): Json<AddSalaryRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = state
        .registry
        .add_salary_record(
            employee_id,
            SalaryRecord {
                month: request.month,
                amount: request.amount,
                paid_at: request.paid_at,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAdvanceRequest {
    pub amount: Decimal,
    pub date: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Handler for POST /api/employees/{id}/advances
pub async fn add_advance(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(request): Json<AddAdvanceRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = state
        .registry
        .add_advance(
            employee_id,
            Advance {
                amount: request.amount,
                date: request.date.unwrap_or_else(Utc::now),
                paid_at: request.paid_at,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}
