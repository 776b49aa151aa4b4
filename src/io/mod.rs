//! I/O module
//!
//! Handles statement file reading and CSV output.
//!
//! # Components
//!
//! - `csv_format` - Output projections and CSV serialization
//! - `sync_reader` - Blocking whole-file reads
//! - `async_reader` - tokio-backed whole-file reads

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{format_amount, format_counterparty, write_transactions_csv};
