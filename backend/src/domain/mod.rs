//! # Domain Module
//!
//! Business entities, the client-facing error taxonomy and the services that
//! sit between the REST handlers and the storage traits.

pub mod account_service;
pub mod errors;
pub mod models;
pub mod transaction_service;

pub use account_service::AccountService;
pub use errors::DomainError;
pub use transaction_service::TransactionService;
