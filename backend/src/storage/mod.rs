//! # Storage Module
//!
//! Persistence gateway between the domain services and the relational
//! database. The domain layer only sees the traits in [`traits`]; the sqlx
//! repositories in [`repositories`] implement them on top of a pooled
//! [`DbConnection`].
//!
//! Backend-specific failure signals (duplicate keys, missing rows) are
//! classified into [`StorageError`] here so that services never inspect
//! driver errors themselves.

pub mod connection;
pub mod errors;
pub mod repositories;
pub mod traits;

pub use connection::{DbConnection, Dialect};
pub use errors::{is_duplicate_key, StorageError};
pub use repositories::{AccountRepository, TransactionRepository};
pub use traits::{AccountStorage, TransactionStorage};
