//! Debit/credit sign resolution

use crate::types::Sign;

/// Type codes that mark a debit
pub const DEBIT_CODES: [&str; 2] = ["1", "4"];

/// Resolve the sign of an amount from its debit/credit type code
///
/// Exact string match against [`DEBIT_CODES`]. Any other value, including an
/// empty or malformed code, is treated as a credit.
pub fn resolve_sign(type_code: &str) -> Sign {
    if DEBIT_CODES.contains(&type_code) {
        Sign::Negative
    } else {
        Sign::Positive
    }
}
