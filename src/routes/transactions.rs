//! Ledger append endpoint. Every figure the report endpoints serve is
//! derived from transactions recorded here.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{PaymentMethod, TransactionType};
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::NewTransaction;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub transfer_to: Option<PaymentMethod>,
    pub date: Option<DateTime<Utc>>,
    pub reference: Option<Uuid>,
    pub recorded_by: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionResponse {
    pub id: Uuid,
}

/// Handler for POST /api/transactions
///
/// Appends one immutable transaction. Corrections are new offsetting
/// transactions, never edits.
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<CreateTransactionResponse>), ApiError> {
    let id = state
        .ledger
        .append(NewTransaction {
            tx_type: request.tx_type,
            amount: request.amount,
            method: request.method,
            transfer_to: request.transfer_to,
            date: request.date.unwrap_or_else(Utc::now),
            reference: request.reference,
            recorded_by: request.recorded_by,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreateTransactionResponse { id })))
}
