//! Processing strategy module for statement batches
//!
//! This module defines the Strategy pattern for reading a batch of statement
//! files and running each through the parser. Implementations differ only in
//! how file reads are scheduled (sequential or concurrent); results are always
//! returned one per input, in input order.

use crate::cli::StrategyType;
use crate::types::{AboError, ProcessedFile};
use std::path::PathBuf;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for statement batches
pub trait ProcessingStrategy: Send + Sync {
    /// Read and parse every input file
    ///
    /// # Returns
    ///
    /// * `Ok(files)` with one [`ProcessedFile`] per input path, in input order
    /// * `Err(AboError)` only if the batch could not run at all
    ///
    /// # Errors
    ///
    /// A file that cannot be read is not an error of the batch: it yields an
    /// empty [`ProcessedFile`] carrying the read error, and the remaining files
    /// are still processed.
    fn process(&self, inputs: &[PathBuf]) -> Result<Vec<ProcessedFile>, AboError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for concurrent reads (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
