//! Asynchronous statement file reader
//!
//! Async counterpart of [`crate::io::sync_reader`], backed by `tokio::fs`.
//! Reads may be awaited concurrently; parsing stays synchronous and happens
//! after the read completes.

use crate::io::sync_reader::file_label;
use crate::types::AboError;
use std::path::Path;

/// Read the full contents of a statement file asynchronously
pub async fn read_statement(path: &Path) -> Result<Vec<u8>, AboError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| AboError::read_failed(&file_label(path), e))
}
