//! Synchronous statement file reader
//!
//! Reads whole statement files into memory. ABO exports are small (one
//! record per transaction, a few hundred bytes each), so the full buffer is
//! read at once and handed to the parser.
//!
//! # Error Handling
//!
//! A failed read is returned as an [`AboError`] naming the path; the caller
//! decides whether it is fatal. The batch strategies turn it into an empty
//! per-file result.

use crate::types::AboError;
use std::fs;
use std::path::Path;

/// Label identifying a file in results and output
pub fn file_label(path: &Path) -> String {
    path.display().to_string()
}

/// Read the full contents of a statement file
///
/// # Examples
///
/// ```no_run
/// use abo_descrambler::io::sync_reader::read_statement;
/// use std::path::Path;
///
/// let bytes = read_statement(Path::new("statement.gpc")).unwrap();
/// println!("{} bytes", bytes.len());
/// ```
pub fn read_statement(path: &Path) -> Result<Vec<u8>, AboError> {
    fs::read(path).map_err(|e| AboError::read_failed(&file_label(path), e))
}
