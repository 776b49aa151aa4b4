//! Transaction-related types for the ABO descrambler
//!
//! This module defines the parsed transaction record and the per-file result
//! collection produced by the batch orchestrator.

use super::account::AccountNumber;
use super::error::AboError;

/// Sign of a transaction amount
///
/// Derived from the debit/credit type code of a `075` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Credit to the own account; rendered without a prefix
    Positive,

    /// Debit from the own account; rendered with a leading `-`
    Negative,
}

impl Sign {
    /// Textual prefix placed in front of the amount magnitude
    pub fn prefix(self) -> &'static str {
        match self {
            Sign::Positive => "",
            Sign::Negative => "-",
        }
    }
}

/// One parsed `075` transaction record
///
/// Every field is a plain text slice of the source record; the amount keeps
/// its exact digits and only gains a `-` prefix for debits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Own account, straight copy of the record bytes
    pub own_account: String,

    /// Counter-party account exactly as read from the record
    pub other_account_scrambled: String,

    /// Counter-party account after reversing the bank's digit permutation
    pub other_account: AccountNumber,

    /// Transaction identifier
    pub id: String,

    /// Signed amount in minor units, e.g. `-000000012345`
    pub amount: String,

    /// Variable symbol
    pub variable_symbol: String,

    /// Counter-party bank code
    pub bank_code: String,

    /// Free-text note
    pub note: String,
}

/// Parsed contents of one input file
///
/// Created once per file. When the file could not be read, `transactions`
/// is empty and `error` describes the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFile {
    /// File name as supplied by the caller
    pub name: String,

    /// Transactions in original record order
    pub transactions: Vec<Transaction>,

    /// Read failure for this file, if any
    pub error: Option<AboError>,
}

impl ProcessedFile {
    /// Create a result for a successfully parsed file
    pub fn new(name: impl Into<String>, transactions: Vec<Transaction>) -> Self {
        ProcessedFile {
            name: name.into(),
            transactions,
            error: None,
        }
    }

    /// Create the empty stand-in for a file that could not be read
    pub fn failed(name: impl Into<String>, error: AboError) -> Self {
        ProcessedFile {
            name: name.into(),
            transactions: Vec::new(),
            error: Some(error),
        }
    }

    /// Whether the file was read successfully
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
