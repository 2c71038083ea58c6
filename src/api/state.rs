//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! infrastructure. Session context is carried here and handed to request
//! handlers explicitly, never looked up ambiently.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{AccountStore, Database};
use crate::services::{AccountManager, AccountService, SessionManager, SessionService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Account creation service
    pub account_service: Arc<dyn AccountService>,
    /// Session issuance and retrieval
    pub session_service: Arc<dyn SessionService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let repo = Arc::new(AccountStore::new(database.get_connection()));

        Self {
            account_service: Arc::new(AccountManager::new(repo)),
            session_service: Arc::new(SessionManager::new(config)),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        account_service: Arc<dyn AccountService>,
        session_service: Arc<dyn SessionService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            account_service,
            session_service,
            database,
        }
    }
}
