//! Core prioritization module
//!
//! This module contains the prioritization algorithm:
//! - `ranker` - Value-density ranking of transactions
//! - `selector` - Greedy prefix selection within a time budget
//!
//! Both operations are pure and borrow their inputs, so one set of loaded
//! transactions and latencies can be prioritized for any number of budgets.

pub mod ranker;
pub mod selector;

pub use ranker::rank;
pub use selector::select;

use crate::types::{LatencyTable, PrioritizerError, SelectionResult, TransactionRecord};
use rust_decimal::Decimal;

/// Rank `transactions` and select the ones that fit within `total_time`
///
/// # Errors
///
/// Propagates `InvalidLatency` and `ValueOverflow` from [`rank`].
pub fn prioritize(
    transactions: &[TransactionRecord],
    latencies: &LatencyTable,
    total_time: Decimal,
) -> Result<SelectionResult, PrioritizerError> {
    let ranked = rank(transactions, latencies)?;
    Ok(select(&ranked, total_time))
}
