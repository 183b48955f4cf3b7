use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use ledger_reports_rs::{config::Config, router, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Starting ledger reports service...");

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration from environment");

    tracing::info!(
        "Configuration loaded: host={}, port={}, auth={}, report_timeout_ms={}",
        config.host,
        config.port,
        if config.api_token.is_some() { "bearer" } else { "open" },
        config.report_timeout_ms
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST/PORT combination");

    let app = router(AppState::new(config));

    tracing::info!("Ledger reports service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
