//! ABO Statement Descrambler Library
//! # Overview
//!
//! This library parses ABO (GPC) bank statement exports and recovers the
//! canonical form of counter-party account numbers that Česká spořitelna
//! writes with their digits reordered.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AccountNumber, Transaction, ProcessedFile, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Parsing pipeline:
//!   - [`core::splitter`] - `CR LF` record splitting
//!   - [`core::extractor`] - Fixed-offset field extraction of `075` records
//!   - [`core::descrambler`] - Account number digit permutation
//!   - [`core::sign`] - Debit/credit sign resolution
//!   - [`core::batch`] - Per-file orchestration preserving upload order
//! - [`io`] - File reading and CSV output
//! - [`strategy`] - Sequential or concurrent batch reading
//!
//! # Parsing Policy
//!
//! Parsing never fails. Records of other types are skipped, short `075`
//! records yield empty tail fields and descrambler input is not validated.
//! The only reported failure is a file that cannot be read, and it affects
//! that file alone.
//!
//! # Example
//!
//! ```
//! use abo_descrambler::{descramble, parse_statement};
//!
//! assert_eq!(descramble("123456789012345").display(), "5341678902012345");
//!
//! let file = parse_statement("empty.gpc", b"");
//! assert!(file.transactions.is_empty());
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{descramble, parse_statement, process_buffers};
pub use io::write_transactions_csv;
pub use types::{AboError, AccountNumber, ProcessedFile, Sign, Transaction};
