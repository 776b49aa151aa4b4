//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Normalized account numbers
//! - `transaction`: Parsed transactions and per-file results
//! - `error`: Error types for the descrambler

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{strip_leading_zeros, AccountNumber, ACCOUNT_NUMBER_LEN};
pub use error::AboError;
pub use transaction::{ProcessedFile, Sign, Transaction};
