use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::models::account::Account;
use crate::storage::AccountStorage;

pub const DUPLICATE_ACCOUNT_MESSAGE: &str = "Account with this document number already exists";
pub const ACCOUNT_NOT_FOUND_MESSAGE: &str = "Account not found";

/// Service for creating and looking up accounts
#[derive(Clone)]
pub struct AccountService {
    repository: Arc<dyn AccountStorage>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountStorage>) -> Self {
        Self { repository }
    }

    /// Create a new account.
    ///
    /// A duplicate document number becomes [`DomainError::Conflict`]; any
    /// other storage failure is returned unchanged.
    pub async fn create_account(&self, account: Account) -> Result<Account> {
        match self.repository.create_account(&account).await {
            Ok(created) => {
                info!("Created account {}", created.id);
                Ok(created)
            }
            Err(e) if e.is_conflict() => {
                warn!("Duplicate document number on account creation");
                Err(DomainError::conflict(DUPLICATE_ACCOUNT_MESSAGE).into())
            }
            Err(e) => {
                error!("Error saving account: {}", e);
                Err(e.into())
            }
        }
    }

    /// Get an account by id.
    ///
    /// A missing row becomes [`DomainError::NotFound`]; any other storage
    /// failure is returned unchanged.
    pub async fn get_account_by_id(&self, account_id: i64) -> Result<Account> {
        match self.repository.find_account_by_id(account_id).await {
            Ok(account) => Ok(account),
            Err(e) if e.is_not_found() => {
                warn!("Account not found: {}", account_id);
                Err(DomainError::not_found(ACCOUNT_NOT_FOUND_MESSAGE).into())
            }
            Err(e) => {
                error!("Error getting account {}: {}", account_id, e);
                Err(e.into())
            }
        }
    }
}
