//! HTTP facade: one stable endpoint per report, plus the write paths
//! that feed them.

pub mod balance;
pub mod entities;
pub mod reports;
pub mod sessions;
pub mod transactions;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::auth::require_bearer;
use crate::health::health;
use crate::state::AppState;

/// Build the application router. The health endpoint stays outside the
/// auth layer so liveness checks work without credentials.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/balance/summary", get(balance::get_balance_summary))
        .route(
            "/api/sales/invoices",
            get(entities::list_invoices).post(entities::create_invoice),
        )
        .route(
            "/api/procurement/orders",
            get(entities::list_orders).post(entities::create_order),
        )
        .route(
            "/api/employees",
            get(entities::list_employees).post(entities::create_employee),
        )
        .route(
            "/api/employees/{id}/salaries",
            post(entities::add_salary_record),
        )
        .route(
            "/api/employees/{id}/advances",
            post(entities::add_advance),
        )
        .route("/api/reports/customer", get(reports::get_customer_report))
        .route("/api/reports/supplier", get(reports::get_supplier_report))
        .route(
            "/api/reports/outstanding-fees",
            get(reports::get_outstanding_fees),
        )
        .route("/api/reports/liquid-cash", get(reports::get_liquid_cash))
        .route(
            "/api/reports/daily-income-loss",
            get(reports::get_daily_income_loss),
        )
        .route(
            "/api/reports/bank-transactions",
            get(reports::get_bank_transactions),
        )
        .route("/api/reports/commissions", get(reports::get_commissions))
        .route(
            "/api/reports/assets-liabilities",
            get(reports::get_assets_liabilities),
        )
        .route("/api/balance-sessions", get(sessions::list_sessions))
        .route(
            "/api/balance-sessions/close",
            post(sessions::close_session_handler),
        )
        .route("/api/transactions", post(transactions::create_transaction))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/api/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
