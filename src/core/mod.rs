//! Core parsing module
//!
//! This module contains the statement parsing pipeline, leaves first:
//! - `splitter` - Splits a raw buffer into `CR LF` delimited records
//! - `extractor` - Reads the fixed-offset fields of `075` transaction records
//! - `descrambler` - Reverses the bank's account-number digit permutation
//! - `sign` - Resolves the amount sign from the debit/credit type code
//! - `batch` - Runs the pipeline over a set of files, keeping their order

pub mod batch;
pub mod descrambler;
pub mod extractor;
pub mod sign;
pub mod splitter;

pub use batch::{parse_statement, parse_transactions, process_buffers};
pub use descrambler::{descramble, Permutation, Slot, ACTIVE_PERMUTATION};
pub use extractor::extract_transaction;
pub use sign::resolve_sign;
pub use splitter::{split_records, split_with, Records, CRLF};
