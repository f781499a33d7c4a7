pub mod account_mapper;
pub mod transaction_mapper;

pub use account_mapper::AccountMapper;
pub use transaction_mapper::TransactionMapper;
