//! Account-number types for the ABO descrambler
//!
//! This module defines the normalized 16-character account number used as
//! both input and output of the descrambling transform.

use std::fmt;

/// Number of characters in a normalized account number
pub const ACCOUNT_NUMBER_LEN: usize = 16;

/// Separators a human-entered account number may contain
const SEPARATORS: [char; 2] = ['/', '-'];

/// Normalized account number
///
/// Always exactly [`ACCOUNT_NUMBER_LEN`] characters long: separators are
/// stripped and the value is left-padded with `0`. Characters are not
/// validated as digits; whatever the caller supplied is carried through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Normalize a raw account number
    ///
    /// Strips every `/` and `-`, left-pads with `0` to 16 characters and keeps
    /// only the first 16 characters of longer values.
    ///
    /// # Examples
    ///
    /// ```
    /// use abo_descrambler::types::AccountNumber;
    ///
    /// let account = AccountNumber::normalize("2000145399/0800");
    /// assert_eq!(account.as_str(), "0020001453990800");
    /// ```
    pub fn normalize(raw: &str) -> Self {
        let stripped: Vec<char> = raw.chars().filter(|c| !SEPARATORS.contains(c)).collect();
        let padding = ACCOUNT_NUMBER_LEN.saturating_sub(stripped.len());

        let normalized = std::iter::repeat('0')
            .take(padding)
            .chain(stripped)
            .take(ACCOUNT_NUMBER_LEN)
            .collect();

        AccountNumber(normalized)
    }

    /// Build an account number from exactly 16 already-normalized characters
    pub(crate) fn from_chars(chars: [char; ACCOUNT_NUMBER_LEN]) -> Self {
        AccountNumber(chars.iter().collect())
    }

    /// The characters of this account number, in order
    pub fn chars(&self) -> [char; ACCOUNT_NUMBER_LEN] {
        let mut out = ['0'; ACCOUNT_NUMBER_LEN];
        for (slot, c) in out.iter_mut().zip(self.0.chars()) {
            *slot = c;
        }
        out
    }

    /// Full 16-character representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form with leading zeros removed
    ///
    /// Zeros are only ever stripped here, never during the transform.
    pub fn display(&self) -> &str {
        strip_leading_zeros(&self.0)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remove leading `0` characters from a field for display
pub fn strip_leading_zeros(value: &str) -> &str {
    value.trim_start_matches('0')
}
