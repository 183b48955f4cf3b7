use std::sync::Arc;

use crate::config::Config;
use crate::store::{EntityRegistry, LedgerStore, SessionStore};

/// Shared handles threaded through every route.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<LedgerStore>,
    pub registry: Arc<EntityRegistry>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            ledger: Arc::new(LedgerStore::new()),
            registry: Arc::new(EntityRegistry::new()),
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
        }
    }
}
