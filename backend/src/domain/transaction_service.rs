use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::domain::models::transaction::Transaction;
use crate::storage::TransactionStorage;

/// Service for recording transactions
#[derive(Clone)]
pub struct TransactionService {
    repository: Arc<dyn TransactionStorage>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionStorage>) -> Self {
        Self { repository }
    }

    /// Store a transaction. Storage failures, including an unknown account,
    /// are returned as-is.
    pub async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let stored = self.repository.create_transaction(&transaction).await?;
        info!(
            "Created transaction {} for account {}: {:?} {}",
            stored.id, stored.account_id, stored.operation_type, stored.amount
        );
        Ok(stored)
    }
}
