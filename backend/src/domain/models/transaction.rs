use chrono::{DateTime, Utc};

/// Classification of a transaction; the numeric codes are part of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Purchase = 1,
    InstallmentPurchase = 2,
    Withdrawal = 3,
    Payment = 4,
}

impl OperationType {
    /// Look up an operation type by its numeric code
    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            1 => Some(Self::Purchase),
            2 => Some(Self::InstallmentPurchase),
            3 => Some(Self::Withdrawal),
            4 => Some(Self::Payment),
            _ => None,
        }
    }

    pub fn id(self) -> u64 {
        self as u64
    }
}

/// A movement recorded against an account.
///
/// `amount` is stored signed: payments are positive, everything else negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub operation_type: OperationType,
    pub amount: f64,
    pub transaction_date: DateTime<Utc>,
}
