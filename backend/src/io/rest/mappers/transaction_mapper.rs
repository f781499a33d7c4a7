use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::models::transaction::{OperationType, Transaction as DomainTransaction};
use crate::io::rest::validation::INVALID_REQUEST_BODY;
use shared::{CreateTransactionRequest, TransactionResponse};

/// Mapper between transaction DTOs and the domain Transaction model.
pub struct TransactionMapper;

impl TransactionMapper {
    /// Build a domain transaction stamped with the current time and with the
    /// amount sign set by its operation type.
    pub fn to_domain(request: CreateTransactionRequest) -> Result<DomainTransaction, DomainError> {
        let operation_type = OperationType::from_id(request.operation_type_id)
            .ok_or_else(|| DomainError::validation(INVALID_REQUEST_BODY))?;

        Ok(DomainTransaction {
            id: 0,
            account_id: request.account_id,
            operation_type,
            amount: normalize_amount(operation_type, request.amount),
            transaction_date: Utc::now(),
        })
    }

    pub fn to_response(domain: DomainTransaction) -> TransactionResponse {
        TransactionResponse {
            transaction_id: domain.id,
            account_id: domain.account_id,
            amount: domain.amount,
            operation_type_id: domain.operation_type.id(),
        }
    }
}

/// Payments keep the given amount; every other operation stores its negation.
/// This is a plain sign flip, not `-amount.abs()`.
pub fn normalize_amount(operation_type: OperationType, amount: f64) -> f64 {
    match operation_type {
        OperationType::Payment => amount,
        OperationType::Purchase | OperationType::InstallmentPurchase | OperationType::Withdrawal => {
            -amount
        }
    }
}
