use async_trait::async_trait;

use crate::domain::models::transaction::Transaction;
use crate::storage::connection::DbConnection;
use crate::storage::errors::StorageError;
use crate::storage::traits::TransactionStorage;

/// Repository for transaction operations
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionStorage for TransactionRepository {
    async fn create_transaction(&self, transaction: &Transaction) -> Result<Transaction, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO transactions (account_id, operation_type, amount, transaction_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(transaction.account_id)
        .bind(transaction.operation_type as i64)
        .bind(transaction.amount)
        .bind(transaction.transaction_date.to_rfc3339())
        .execute(self.db.pool())
        .await?;

        let id = result.last_insert_id().ok_or(StorageError::MissingInsertId)?;

        Ok(Transaction {
            id,
            ..transaction.clone()
        })
    }
}
