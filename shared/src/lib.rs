//! Wire types exchanged with API clients.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    /// Customer document number; must be unique across accounts
    pub document_number: String,
}

/// Returned by both `POST /accounts` and `GET /accounts/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub document_number: String,
    #[serde(rename = "account_id")]
    pub id: i64,
}

/// Missing fields default to zero so that they are rejected by validation
/// rather than by the JSON decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub account_id: i64,
    /// Unsigned amount; the stored sign is derived from the operation type
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub operation_type_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction_id: i64,
    pub account_id: i64,
    /// Signed amount as stored
    pub amount: f64,
    pub operation_type_id: u64,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}
