//! Fixed-offset field extraction for `075` transaction records
//!
//! Every field is a half-open byte range counted from the start of the record
//! and decoded as Latin-1 (one byte, one character). Extraction is best-effort:
//! ranges past the end of a short record are truncated or empty, never an
//! error.

use crate::core::descrambler::descramble;
use crate::core::sign::resolve_sign;
use crate::types::Transaction;
use log::{debug, warn};
use std::ops::Range;

/// Record type identifier of a transaction record
pub const TRANSACTION_RECORD_TYPE: &[u8; 3] = b"075";

/// Byte ranges of the fields of a `075` record
pub mod layout {
    use std::ops::Range;

    pub const RECORD_TYPE: Range<usize> = 0..3;
    pub const OWN_ACCOUNT: Range<usize> = 3..19;
    /// Shares its bytes with [`OWN_ACCOUNT`]
    pub const TYPE_CODE: Range<usize> = 3..19;
    pub const OTHER_ACCOUNT: Range<usize> = 19..35;
    pub const ID: Range<usize> = 35..48;
    pub const AMOUNT: Range<usize> = 48..60;
    pub const VARIABLE_SYMBOL: Range<usize> = 61..71;
    pub const BANK_CODE: Range<usize> = 73..77;
    pub const NOTE: Range<usize> = 97..117;

    /// Length a record needs for every field to be complete
    pub const FULL_RECORD_LEN: usize = NOTE.end;
}

/// Decode the bytes in `range` as Latin-1, clamped to the record length
fn field(record: &[u8], range: Range<usize>) -> String {
    let end = range.end.min(record.len());
    let start = range.start.min(end);
    record[start..end].iter().map(|&b| char::from(b)).collect()
}

/// Whether `record` starts with the transaction record identifier
pub fn is_transaction_record(record: &[u8]) -> bool {
    record.get(layout::RECORD_TYPE) == Some(&TRANSACTION_RECORD_TYPE[..])
}

/// Extract a [`Transaction`] from one record
///
/// Returns `None` for any record whose identifier is not `075`; such records
/// are a legitimate part of the format and are skipped silently. Records
/// shorter than [`layout::FULL_RECORD_LEN`] still produce a transaction with
/// truncated or empty tail fields.
pub fn extract_transaction(record: &[u8]) -> Option<Transaction> {
    if !is_transaction_record(record) {
        debug!(
            "Skipping record with type '{}'",
            field(record, layout::RECORD_TYPE)
        );
        return None;
    }

    if record.len() < layout::FULL_RECORD_LEN {
        warn!(
            "Transaction record is {} bytes, expected {}; missing fields left empty",
            record.len(),
            layout::FULL_RECORD_LEN
        );
    }

    let other_account_scrambled = field(record, layout::OTHER_ACCOUNT);
    let sign = resolve_sign(&field(record, layout::TYPE_CODE));

    Some(Transaction {
        own_account: field(record, layout::OWN_ACCOUNT),
        other_account: descramble(&other_account_scrambled),
        other_account_scrambled,
        id: field(record, layout::ID),
        amount: format!("{}{}", sign.prefix(), field(record, layout::AMOUNT)),
        variable_symbol: field(record, layout::VARIABLE_SYMBOL),
        bank_code: field(record, layout::BANK_CODE),
        note: field(record, layout::NOTE),
    })
}
