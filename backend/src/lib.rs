//! # Accounts Backend
//!
//! HTTP service that manages bank accounts and records transactions against
//! them.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, validation, mappers)
//!     ↓
//! Domain Layer (services, models, error kinds)
//!     ↓
//! Storage Layer (storage traits, sqlx repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{AccountService, TransactionService};
use crate::storage::{AccountRepository, DbConnection, TransactionRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub account_service: AccountService,
    pub transaction_service: TransactionService,
}

impl AppState {
    pub fn new(account_service: AccountService, transaction_service: TransactionService) -> Self {
        Self {
            account_service,
            transaction_service,
        }
    }

    /// Wire the sqlx repositories over an open connection
    pub fn from_connection(db: DbConnection) -> Self {
        let account_service = AccountService::new(Arc::new(AccountRepository::new(db.clone())));
        let transaction_service = TransactionService::new(Arc::new(TransactionRepository::new(db)));
        Self::new(account_service, transaction_service)
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database_url, config.max_connections).await?;
    info!("Connected to {:?} database", db.dialect());

    info!("Setting up application state");
    Ok(AppState::from_connection(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/accounts", post(io::rest::create_account))
        .route("/accounts/:account_id", get(io::rest::get_account))
        .route("/transactions", post(io::rest::create_transaction))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
