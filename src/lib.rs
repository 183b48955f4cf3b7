pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod health;
pub mod reports;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use routes::router;
pub use state::AppState;
