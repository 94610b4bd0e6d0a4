//! Budget selector
//!
//! Walks a ranked sequence and admits transactions while their cumulative
//! latency stays within the time budget.
//!
//! Selection stops at the first transaction that does not fit. Later, cheaper
//! transactions are never considered, so the admitted set is always a prefix of
//! the ranked sequence.
//!
//! A candidate whose latency would push the consumed time past `Decimal::MAX`
//! does not fit any budget. The value total saturates at `Decimal::MAX`; batches
//! that could reach it are already rejected by ranking.

use crate::types::{RankedTransaction, SelectionResult};
use rust_decimal::Decimal;
use tracing::debug;

/// Select the longest ranked prefix that fits within `total_time`
///
/// An empty input or a zero budget yields an empty selection.
pub fn select(ranked: &[RankedTransaction], total_time: Decimal) -> SelectionResult {
    let mut result = SelectionResult::empty();

    for candidate in ranked {
        let consumed = match result.consumed_time.checked_add(candidate.latency) {
            Some(consumed) if consumed <= total_time => consumed,
            _ => {
                debug!(
                    id = candidate.id(),
                    latency = %candidate.latency,
                    remaining = %total_time.saturating_sub(result.consumed_time),
                    "budget exhausted"
                );
                break;
            }
        };

        result.consumed_time = consumed;
        result.total_value = result.total_value.saturating_add(candidate.amount());
        result.admitted.push(candidate.clone());
    }

    result
}
