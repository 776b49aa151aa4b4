//! Synchronous processing strategy
//!
//! Reads statement files one after another with `std::fs` and parses each as
//! soon as it is read. Output order trivially matches input order.
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - File reading to `sync_reader::read_statement`
//! - Parsing and per-file error handling to `core::batch`

use crate::core::batch::{log_batch_summary, process_read_result};
use crate::io::sync_reader::{file_label, read_statement};
use crate::strategy::ProcessingStrategy;
use crate::types::{AboError, ProcessedFile};
use std::path::PathBuf;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use abo_descrambler::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::PathBuf;
///
/// let strategy = SyncProcessingStrategy;
/// let files = strategy
///     .process(&[PathBuf::from("statement.gpc")])
///     .expect("Processing failed");
/// println!("{} transactions", files[0].transactions.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, inputs: &[PathBuf]) -> Result<Vec<ProcessedFile>, AboError> {
        let files: Vec<ProcessedFile> = inputs
            .iter()
            .map(|path| process_read_result(&file_label(path), read_statement(path)))
            .collect();

        log_batch_summary(&files);

        Ok(files)
    }
}
