//! Transaction Prioritizer Library
//! # Overview
//!
//! This library selects which transactions to process within a fixed time
//! budget so that the total USD value processed is as high as the greedy
//! value-density policy allows. Each transaction's processing latency depends
//! on the country of the bank that originated it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, LatencyTable, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - The prioritization algorithm:
//!   - [`core::ranker`] - Ranks transactions by value density (amount / latency)
//!   - [`core::selector`] - Admits the ranked prefix that fits within the budget
//! - [`io`] - CSV and JSON loaders, summary and selection output
//! - [`runner`] - Loads inputs and evaluates every configured budget
//!
//! # Selection Policy
//!
//! Transactions are admitted in descending density order until the first one
//! that would overrun the budget. Selection stops there, even if a later,
//! cheaper transaction would still fit.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use crate::core::{prioritize, rank, select};
pub use io::{load_latencies, load_transactions};
pub use runner::{run, BudgetReport, RunConfig};
pub use types::{
    CountryCode, LatencyTable, PrioritizerError, RankedTransaction, SelectionResult,
    TransactionId, TransactionRecord,
};
