//! # REST API for Transactions

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::CreateTransactionRequest;
use tracing::{error, info};

use crate::domain::errors::DomainError;
use crate::io::rest::mappers::TransactionMapper;
use crate::io::rest::validation::validate_create_transaction;
use crate::AppState;

/// Decoder failures use a different capitalisation than schema failures.
pub const MALFORMED_TRANSACTION_BODY: &str = "Invalid Request Body";

/// Create a transaction against an existing account.
///
/// Any failure while storing the transaction is reported as a generic 500,
/// even when the account lookup before it would have produced a richer error.
pub async fn create_transaction(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    info!("POST /transactions");

    let request = match serde_json::from_slice::<CreateTransactionRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("Error decoding request body: {}", e);
            return DomainError::validation(MALFORMED_TRANSACTION_BODY).into_response();
        }
    };

    if let Err(e) = validate_create_transaction(&request) {
        error!("Error validating request body: {}", e);
        return e.into_response();
    }

    let account_id = request.account_id;
    let transaction = match TransactionMapper::to_domain(request) {
        Ok(transaction) => transaction,
        Err(e) => return e.into_response(),
    };

    if let Err(e) = state.account_service.get_account_by_id(account_id).await {
        error!("Error getting account {}: {:#}", account_id, e);
        return DomainError::classify(&e, "Error getting account").into_response();
    }

    match state.transaction_service.create_transaction(transaction).await {
        Ok(stored) => (StatusCode::CREATED, Json(TransactionMapper::to_response(stored))).into_response(),
        Err(e) => {
            error!("Error creating transaction for account {}: {:#}", account_id, e);
            DomainError::unknown("Fail creating transaction").into_response()
        }
    }
}
