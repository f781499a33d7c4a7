//! # REST API for Accounts
//!
//! Endpoints for creating and retrieving accounts.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::CreateAccountRequest;
use tracing::{error, info};

use crate::domain::errors::DomainError;
use crate::io::rest::mappers::AccountMapper;
use crate::io::rest::validation::{validate_create_account, INVALID_REQUEST_BODY};
use crate::AppState;

pub const INVALID_ACCOUNT_ID: &str = "Invalid Operation ID";

/// Create a new account
pub async fn create_account(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    info!("POST /accounts");

    let request = match serde_json::from_slice::<CreateAccountRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("Error parsing request body: {}", e);
            return DomainError::validation(INVALID_REQUEST_BODY).into_response();
        }
    };

    if let Err(e) = validate_create_account(&request) {
        error!("Error validating request body: {}", e);
        return e.into_response();
    }

    let account = AccountMapper::to_domain(request);

    match state.account_service.create_account(account).await {
        Ok(created) => (StatusCode::CREATED, Json(AccountMapper::to_response(created))).into_response(),
        Err(e) => {
            error!("Error creating account: {:#}", e);
            DomainError::classify(&e, "Error creating account").into_response()
        }
    }
}

/// Get an account by ID
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Response {
    info!("GET /accounts/{}", account_id);

    let account_id = match account_id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => return DomainError::validation(INVALID_ACCOUNT_ID).into_response(),
    };

    match state.account_service.get_account_by_id(account_id).await {
        Ok(account) => (StatusCode::OK, Json(AccountMapper::to_response(account))).into_response(),
        Err(e) => {
            error!("Error getting account {}: {:#}", account_id, e);
            DomainError::classify(&e, "Error getting account").into_response()
        }
    }
}
