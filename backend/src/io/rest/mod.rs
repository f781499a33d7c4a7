//! # REST API Interface Layer
//!
//! HTTP endpoints for accounts and transactions. This layer handles:
//! - JSON request decoding and validation
//! - Mapping between wire DTOs and domain models
//! - Translating domain errors into status codes and error bodies
//!
//! Backend error details are logged here and never returned to clients.

pub mod account_apis;
pub mod error_response;
pub mod mappers;
pub mod transaction_apis;
pub mod validation;

pub use account_apis::{create_account, get_account};
pub use transaction_apis::create_transaction;
