use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::account::Account;
use crate::storage::connection::DbConnection;
use crate::storage::errors::StorageError;
use crate::storage::traits::AccountStorage;

/// Repository for account operations
#[derive(Clone)]
pub struct AccountRepository {
    db: DbConnection,
}

impl AccountRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStorage for AccountRepository {
    async fn create_account(&self, account: &Account) -> Result<Account, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (document_number)
            VALUES (?)
            "#,
        )
        .bind(account.document_number.as_str())
        .execute(self.db.pool())
        .await?;

        let id = result.last_insert_id().ok_or(StorageError::MissingInsertId)?;

        Ok(Account {
            id,
            document_number: account.document_number.clone(),
        })
    }

    async fn find_account_by_id(&self, id: i64) -> Result<Account, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, document_number
            FROM accounts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Account {
                id: r.try_get("id")?,
                document_number: r.try_get("document_number")?,
            }),
            None => Err(StorageError::RecordNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> AccountRepository {
        let db = DbConnection::in_memory().await.expect("Failed to create test database");
        AccountRepository::new(db)
    }

    #[tokio::test]
    async fn test_create_and_find_account() {
        let repo = setup_test().await;

        let created = repo.create_account(&Account::new("12345678")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.document_number, "12345678");

        let found = repo.find_account_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = setup_test().await;

        let first = repo.create_account(&Account::new("111")).await.unwrap();
        let second = repo.create_account(&Account::new("222")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_duplicate_document_number_is_a_conflict() {
        let repo = setup_test().await;

        repo.create_account(&Account::new("12345678")).await.unwrap();
        let err = repo.create_account(&Account::new("12345678")).await.unwrap_err();
        assert!(err.is_conflict(), "expected duplicate key, got {:?}", err);
    }

    #[tokio::test]
    async fn test_find_missing_account() {
        let repo = setup_test().await;

        let err = repo.find_account_by_id(42).await.unwrap_err();
        assert!(err.is_not_found(), "expected not found, got {:?}", err);
    }
}
