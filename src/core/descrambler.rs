//! Account number descrambling
//!
//! Česká spořitelna exports counter-party account numbers with their digits
//! reordered. The bank documents the reordering as a table of logical slots:
//! six "personal" digits `P1..P6` (the account prefix) and ten control digits
//! `C0..C9` (the base number). Recovering the canonical number means reading
//! the padded input at a fixed offset for each output slot.

use crate::types::{AccountNumber, ACCOUNT_NUMBER_LEN};

/// Logical digit slot in the bank's scramble table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Prefix digit, 1-indexed
    P(u8),
    /// Base number digit
    C(u8),
}

/// A fixed scramble permutation
///
/// `slots[i]` names the logical slot produced at output position `i` and
/// `offsets[i]` is the 0-indexed input position it is read from.
#[derive(Debug, PartialEq, Eq)]
pub struct Permutation {
    pub slots: [Slot; ACCOUNT_NUMBER_LEN],
    pub offsets: [usize; ACCOUNT_NUMBER_LEN],
}

/// The permutation applied to ABO counter-party accounts
pub const ACTIVE_PERMUTATION: Permutation = Permutation {
    slots: [
        Slot::C(0),
        Slot::C(8),
        Slot::C(9),
        Slot::C(6),
        Slot::C(1),
        Slot::C(2),
        Slot::C(3),
        Slot::C(4),
        Slot::C(5),
        Slot::C(7),
        Slot::P(1),
        Slot::P(2),
        Slot::P(3),
        Slot::P(4),
        Slot::P(5),
        Slot::P(6),
    ],
    offsets: [15, 13, 14, 11, 6, 7, 8, 9, 10, 12, 0, 1, 2, 3, 4, 5],
};

impl Permutation {
    /// Apply this permutation to an already-normalized account number
    pub fn apply(&self, input: &AccountNumber) -> AccountNumber {
        let source = input.chars();
        let mut output = ['0'; ACCOUNT_NUMBER_LEN];
        for (slot, &offset) in output.iter_mut().zip(self.offsets.iter()) {
            *slot = source[offset];
        }
        AccountNumber::from_chars(output)
    }
}

/// Descramble a free-typed or extracted account number
///
/// Separators `/` and `-` are stripped and the value is padded to 16
/// characters before the permutation is applied. Non-digit characters are
/// carried through unchanged.
///
/// # Examples
///
/// ```
/// use abo_descrambler::core::descrambler::descramble;
///
/// assert_eq!(descramble("123456789012345").as_str(), "5341678902012345");
/// ```
pub fn descramble(scrambled: &str) -> AccountNumber {
    ACTIVE_PERMUTATION.apply(&AccountNumber::normalize(scrambled))
}
