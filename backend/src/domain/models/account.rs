/// A customer account.
///
/// `id` is zero until the account has been persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub document_number: String,
}

impl Account {
    /// Build an account that has not been stored yet
    pub fn new(document_number: impl Into<String>) -> Self {
        Self {
            id: 0,
            document_number: document_number.into(),
        }
    }
}
