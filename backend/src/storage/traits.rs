//! # Storage Traits
//!
//! Narrow interfaces the domain services depend on, so that the relational
//! backend can be swapped or stubbed without touching business logic.

use async_trait::async_trait;

use super::errors::StorageError;
use crate::domain::models::{account::Account, transaction::Transaction};

/// Account persistence operations
#[async_trait]
pub trait AccountStorage: Send + Sync {
    /// Insert a new account and return it with its assigned id.
    ///
    /// Fails with [`StorageError::DuplicateKey`] when the document number is
    /// already taken.
    async fn create_account(&self, account: &Account) -> Result<Account, StorageError>;

    /// Fetch an account, failing with [`StorageError::RecordNotFound`] when
    /// no row matches.
    async fn find_account_by_id(&self, id: i64) -> Result<Account, StorageError>;
}

/// Transaction persistence operations
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Insert a new transaction and return it with its assigned id.
    /// Foreign-key violations are reported as plain database errors.
    async fn create_transaction(&self, transaction: &Transaction) -> Result<Transaction, StorageError>;
}
