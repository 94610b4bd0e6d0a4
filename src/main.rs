//! Transaction Prioritizer CLI
//!
//! Command-line interface for selecting transactions within time budgets.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --transactions transactions.csv --latencies api_latencies.json
//! cargo run -- --budget 50 --budget 1000 --selected-output selected.csv
//! RUST_LOG=debug cargo run
//! ```
//!
//! The program loads the transactions and the latency table, then prints one
//! summary line per budget to stdout. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed input, unknown country code, etc.)

use std::process;
use tracing_subscriber::EnvFilter;
use transaction_prioritizer::{cli, runner};

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_run_config();

    let mut output = std::io::stdout();
    if let Err(e) = runner::run(&config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
