//! Batch orchestration over in-memory statement buffers
//!
//! Runs every buffer through split → extract → descramble/sign and assembles
//! one [`ProcessedFile`] per input, in input order. Each call produces a fresh
//! result set; nothing is shared between files or between calls.

use crate::core::extractor::extract_transaction;
use crate::core::splitter::split_records;
use crate::types::{AboError, ProcessedFile, Transaction};
use log::{debug, info, warn};

/// Parse every transaction record of one statement buffer
///
/// Transactions keep the order of their records; non-`075` records are
/// skipped.
pub fn parse_transactions(buffer: &[u8]) -> Vec<Transaction> {
    split_records(buffer)
        .filter_map(extract_transaction)
        .collect()
}

/// Parse one named statement buffer into a [`ProcessedFile`]
pub fn parse_statement(name: &str, buffer: &[u8]) -> ProcessedFile {
    let transactions = parse_transactions(buffer);
    debug!(
        "Parsed {} transactions from '{}' ({} bytes)",
        transactions.len(),
        name,
        buffer.len()
    );
    ProcessedFile::new(name, transactions)
}

/// Turn the outcome of reading one file into its [`ProcessedFile`]
///
/// A read failure yields the empty stand-in carrying the error, so callers
/// can assemble a batch without aborting on a single bad file.
pub fn process_read_result(name: &str, contents: Result<Vec<u8>, AboError>) -> ProcessedFile {
    match contents {
        Ok(buffer) => parse_statement(name, &buffer),
        Err(e) => {
            warn!("Could not read '{}': {}", name, e);
            ProcessedFile::failed(name, e)
        }
    }
}

/// Parse a batch of named buffers
///
/// Returns one [`ProcessedFile`] per input, in input order.
pub fn process_buffers<'a, I>(files: I) -> Vec<ProcessedFile>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let processed: Vec<ProcessedFile> = files
        .into_iter()
        .map(|(name, buffer)| parse_statement(name, buffer))
        .collect();
    log_batch_summary(&processed);
    processed
}

/// Log a one-line summary of a finished batch
pub fn log_batch_summary(files: &[ProcessedFile]) {
    let transactions: usize = files.iter().map(|f| f.transactions.len()).sum();
    let failed = files.iter().filter(|f| !f.is_ok()).count();
    info!(
        "Processed {} files ({} unreadable), {} transactions",
        files.len(),
        failed,
        transactions
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "07500000000190001230123456789012345000000000004200000001234510000000777000800                    RENT OCTOBER        ";

    fn statement(lines: &[&str]) -> Vec<u8> {
        let mut buffer = lines.join("\r\n").into_bytes();
        buffer.extend_from_slice(b"\r\n");
        buffer
    }

    #[test]
    fn test_fixture_record_is_full_length() {
        assert_eq!(FULL.len(), 117);
    }

    #[test]
    fn test_parse_transactions_skips_other_records() {
        let buffer = statement(&[
            "0740000000019000123ACCOUNT HOLDER",
            FULL,
            "999garbage",
            FULL,
        ]);

        let transactions = parse_transactions(&buffer);
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0], transactions[1]);
        assert_eq!(transactions[0].other_account.as_str(), "5341678902012345");
    }

    #[test]
    fn test_unknown_record_does_not_disturb_neighbours() {
        let second = FULL.replacen("0000000000042", "0000000000043", 1);
        let buffer = statement(&[FULL, "999", &second]);

        let transactions = parse_transactions(&buffer);
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, "0000000000042");
        assert_eq!(transactions[1].id, "0000000000043");
    }

    #[test]
    fn test_process_buffers_keeps_upload_order() {
        let good = statement(&[FULL]);
        let files = process_buffers(vec![
            ("a.gpc", good.as_slice()),
            ("empty.gpc", &b""[..]),
        ]);

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "a.gpc");
        assert_eq!(files[0].transactions.len(), 1);
        assert_eq!(files[1].name, "empty.gpc");
        assert!(files[1].transactions.is_empty());
        assert!(files[1].is_ok());
    }

    #[test]
    fn test_truncated_file_does_not_affect_siblings() {
        let good = statement(&[FULL]);
        let truncated = &FULL.as_bytes()[..50];
        let files = process_buffers(vec![
            ("truncated.gpc", truncated),
            ("good.gpc", good.as_slice()),
        ]);

        assert_eq!(files[0].transactions.len(), 1);
        assert_eq!(files[0].transactions[0].note, "");
        assert_eq!(files[1].transactions[0].note, "RENT OCTOBER        ");
    }

    #[test]
    fn test_process_read_result_failure_is_empty() {
        let file = process_read_result("gone.gpc", Err(AboError::file_not_found("gone.gpc")));
        assert!(!file.is_ok());
        assert!(file.transactions.is_empty());
    }

    #[test]
    fn test_process_read_result_success() {
        let file = process_read_result("ok.gpc", Ok(statement(&[FULL])));
        assert!(file.is_ok());
        assert_eq!(file.transactions.len(), 1);
    }
}
