//! Asynchronous processing strategy
//!
//! Reads statement files concurrently on a tokio multi-threaded runtime and
//! parses each file as soon as its read completes.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (max_concurrent_files)
//!     ├── async_reader::read_statement (tokio::fs)
//!     └── core::batch (per-file parsing)
//! ```
//!
//! # Ordering
//!
//! Reads complete in any order, but results are yielded through an ordered
//! buffered stream, so the returned collection always follows input order.
//! No state is shared between files.

use crate::core::batch::{log_batch_summary, process_read_result};
use crate::io::async_reader::read_statement;
use crate::io::sync_reader::file_label;
use crate::strategy::ProcessingStrategy;
use crate::types::{AboError, ProcessedFile};
use futures::stream::{self, StreamExt};
use log::warn;
use std::path::PathBuf;

/// Configuration for concurrent reading
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Maximum number of files read at the same time
    pub max_concurrent_files: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_files: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, replacing a zero limit with the default
    pub fn new(max_concurrent_files: usize) -> Self {
        let default = Self::default();

        let max_concurrent_files = if max_concurrent_files == 0 {
            warn!(
                "Invalid max_concurrent_files ({}), using default ({})",
                max_concurrent_files, default.max_concurrent_files
            );
            default.max_concurrent_files
        } else {
            max_concurrent_files
        };

        Self {
            max_concurrent_files,
        }
    }
}

/// Asynchronous processing strategy
///
/// Each file is read and parsed in its own tokio task; at most
/// `max_concurrent_files` tasks are in flight at once.
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

/// Read one file and parse it
async fn read_and_parse(path: PathBuf) -> ProcessedFile {
    let label = file_label(&path);
    let contents = read_statement(&path).await;
    process_read_result(&label, contents)
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, inputs: &[PathBuf]) -> Result<Vec<ProcessedFile>, AboError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_files)
            .build()
            .map_err(|e| AboError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

        let files = runtime.block_on(async {
            stream::iter(inputs.iter().cloned())
                .map(|path| {
                    let label = file_label(&path);
                    let task = tokio::spawn(read_and_parse(path));
                    async move {
                        match task.await {
                            Ok(file) => file,
                            Err(e) => ProcessedFile::failed(
                                label,
                                AboError::runtime(format!("File task failed: {}", e)),
                            ),
                        }
                    }
                })
                .buffered(self.config.max_concurrent_files)
                .collect::<Vec<ProcessedFile>>()
                .await
        });

        log_batch_summary(&files);

        Ok(files)
    }
}
