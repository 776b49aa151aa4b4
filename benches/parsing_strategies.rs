//! Benchmark suite for the parsing pipeline and processing strategies
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Statement buffers are generated in memory with 100, 1,000 and 100,000
//! transaction records. Strategy benchmarks read the happy-path test fixture
//! repeated as a batch of files.

use abo_descrambler::cli::StrategyType;
use abo_descrambler::core::batch::parse_transactions;
use abo_descrambler::core::descrambler::descramble;
use abo_descrambler::strategy::{create_strategy, BatchConfig};
use std::path::PathBuf;

const RECORD: &str = "07500000000190001230123456789012345000000000004200000001234510000000777000800                    RENT OCTOBER        ";

fn main() {
    divan::main();
}

fn statement(records: usize) -> Vec<u8> {
    vec![RECORD; records].join("\r\n").into_bytes()
}

/// Benchmark a single account descramble
#[divan::bench]
fn descramble_account() -> abo_descrambler::AccountNumber {
    descramble(divan::black_box("19-2000145399/0800"))
}

/// Benchmark in-memory parsing of statements of increasing size
#[divan::bench(args = [100, 1_000, 100_000])]
fn parse_statement_buffer(bencher: divan::Bencher, records: usize) {
    let buffer = statement(records);
    bencher.bench(|| parse_transactions(divan::black_box(&buffer)));
}

fn fixture_batch() -> Vec<PathBuf> {
    vec![PathBuf::from("tests/fixtures/happy_path/input.gpc"); 64]
}

/// Benchmark the synchronous strategy over a batch of 64 files
#[divan::bench]
fn sync_strategy_batch() {
    let strategy = create_strategy(StrategyType::Sync, None);
    strategy
        .process(&fixture_batch())
        .expect("Processing failed");
}

/// Benchmark the asynchronous strategy over a batch of 64 files
#[divan::bench]
fn async_strategy_batch() {
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));
    strategy
        .process(&fixture_batch())
        .expect("Processing failed");
}
