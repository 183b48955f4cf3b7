//! Shared test harness: spawns the real router on an ephemeral port so
//! boundary tests cross the actual HTTP ingress.

#![allow(dead_code)]

use ledger_reports_rs::{config::Config, router, AppState};

/// Spawn the service with default configuration. Returns the base URL
/// and the shared state for direct seeding/inspection.
pub async fn spawn_app() -> (String, AppState) {
    spawn_app_with(Config::default()).await
}

pub async fn spawn_app_with(config: Config) -> (String, AppState) {
    let state = AppState::new(config);
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    (format!("http://{}", addr), state)
}
