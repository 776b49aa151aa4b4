//! ABO Statement Descrambler CLI
//!
//! Command-line interface for parsing ABO statement files and descrambling
//! counter-party account numbers.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- files statement.gpc > transactions.csv
//! cargo run -- files --strategy sync --format display a.gpc b.gpc
//! cargo run -- files --max-concurrent 4 *.gpc > transactions.csv
//! cargo run -- account 2000145399/0800
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug`, `info` or `warn` to control logging verbosity
//!
//! # Exit Codes
//!
//! - 0: Success (unreadable input files are reported on stderr but do not fail the run)
//! - 1: Error (runtime could not start, output could not be written)

use abo_descrambler::cli::{self, Command, FilesArgs};
use abo_descrambler::types::AboError;
use abo_descrambler::{descramble, strategy, write_transactions_csv};
use std::io::Write;
use std::process;

fn main() {
    env_logger::init();

    let args = cli::parse_args();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AboError> {
    match command {
        Command::Files(files_args) => run_files(files_args),
        Command::Account { number } => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", descramble(&number).display())?;
            Ok(())
        }
    }
}

fn run_files(args: FilesArgs) -> Result<(), AboError> {
    let config = matches!(args.strategy, cli::StrategyType::Async).then(|| args.to_batch_config());
    let strategy = strategy::create_strategy(args.strategy, config);

    let files = strategy.process(&args.input_files)?;

    for file in &files {
        if let Some(e) = &file.error {
            eprintln!("Skipping {}: {}", file.name, e);
        }
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_transactions_csv(&files, args.format, &mut handle)
}
