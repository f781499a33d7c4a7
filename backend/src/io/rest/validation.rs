//! Request schema checks. Each function is pure and reports the generic
//! "Invalid request body" validation error on the first violated constraint.

use shared::{CreateAccountRequest, CreateTransactionRequest};

use crate::domain::errors::DomainError;
use crate::domain::models::transaction::OperationType;

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// `document_number` is required
pub fn validate_create_account(request: &CreateAccountRequest) -> Result<(), DomainError> {
    if request.document_number.is_empty() {
        return Err(DomainError::validation(INVALID_REQUEST_BODY));
    }
    Ok(())
}

/// `account_id >= 1`, `amount >= 0`, and a known `operation_type_id`
pub fn validate_create_transaction(request: &CreateTransactionRequest) -> Result<(), DomainError> {
    if request.account_id < 1 {
        return Err(DomainError::validation(INVALID_REQUEST_BODY));
    }
    if request.amount.is_nan() || request.amount < 0.0 {
        return Err(DomainError::validation(INVALID_REQUEST_BODY));
    }
    if OperationType::from_id(request.operation_type_id).is_none() {
        return Err(DomainError::validation(INVALID_REQUEST_BODY));
    }
    Ok(())
}
