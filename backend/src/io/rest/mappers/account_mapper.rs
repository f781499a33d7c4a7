use crate::domain::models::account::Account as DomainAccount;
use shared::{AccountResponse, CreateAccountRequest};

/// Mapper between account DTOs and the domain Account model.
pub struct AccountMapper;

impl AccountMapper {
    pub fn to_domain(request: CreateAccountRequest) -> DomainAccount {
        DomainAccount::new(request.document_number)
    }

    pub fn to_response(domain: DomainAccount) -> AccountResponse {
        AccountResponse {
            document_number: domain.document_number,
            id: domain.id,
        }
    }
}
