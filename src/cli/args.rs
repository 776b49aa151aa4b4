use crate::strategy::BatchConfig;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Descramble Česká spořitelna account numbers in ABO statements
#[derive(Parser, Debug)]
#[command(name = "abo-descrambler")]
#[command(about = "Parse ABO statement files and descramble counter-party account numbers", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse one or more ABO statement files and print their transactions as CSV
    Files(FilesArgs),

    /// Descramble a single account number
    Account {
        /// Scrambled account number, optionally containing '/' or '-'
        #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
        number: String,
    },
}

/// Arguments of the `files` subcommand
#[derive(Args, Debug)]
pub struct FilesArgs {
    /// Statement files, processed and printed in the given order
    #[arg(value_name = "FILE", required = true, help = "Paths to ABO statement files")]
    pub input_files: Vec<PathBuf>,

    /// Reading strategy to use for the batch
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Reading strategy: 'sync' for sequential or 'async' for concurrent reads"
    )]
    pub strategy: StrategyType,

    /// Maximum number of files read concurrently (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of files read concurrently (default: CPU cores)"
    )]
    pub max_concurrent_files: Option<usize>,

    /// Output projection
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "raw",
        help = "Output format: 'raw' for exact field text or 'display' for formatted values"
    )]
    pub format: OutputFormat,
}

/// Available reading strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available output projections
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every field exactly as extracted
    Raw,
    /// Leading zeros stripped, `number/bank` counter-party, decimal-comma amounts
    Display,
}

impl FilesArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Falls back to the default when no value is given; a zero value is
    /// rejected by [`BatchConfig::new`] with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.max_concurrent_files {
            Some(max_concurrent_files) => BatchConfig::new(max_concurrent_files),
            None => BatchConfig::default(),
        }
    }
}
