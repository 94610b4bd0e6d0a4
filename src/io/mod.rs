//! I/O module
//!
//! Loads the prioritizer's inputs and writes its results.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, selection output)
//! - `transaction_reader` - Transaction CSV reader with iterator interface
//! - `latency_loader` - JSON latency table loader
//! - `report` - Human-readable per-budget summaries

pub mod csv_format;
pub mod latency_loader;
pub mod report;
pub mod transaction_reader;

pub use csv_format::{convert_csv_record, write_selection_csv, CsvRecord};
pub use latency_loader::{load_latencies, parse_latencies};
pub use report::{format_summary, write_summaries};
pub use transaction_reader::{collect_transactions, load_transactions, TransactionReader};
