//! Density ranker
//!
//! Resolves each transaction's latency from the [`LatencyTable`] and orders the
//! batch by value density (`amount / latency`), highest first.
//!
//! Ranking is all-or-nothing: a single transaction with no usable latency fails
//! the whole batch with [`PrioritizerError::InvalidLatency`]. A batch whose
//! absolute amounts cannot be totalled in a `Decimal` fails with
//! [`PrioritizerError::ValueOverflow`], so any admitted subset can be summed.

use crate::types::{LatencyTable, PrioritizerError, RankedTransaction, TransactionRecord};
use rust_decimal::Decimal;
use tracing::debug;

/// Rank transactions by value density, descending
///
/// Produces one [`RankedTransaction`] per input record. Equal densities keep
/// their input order.
///
/// # Errors
///
/// Returns `InvalidLatency` if a record's country code is missing from the
/// table, if its latency is zero or negative, or if the density overflows.
/// Returns `ValueOverflow` if the amounts cannot be totalled.
pub fn rank(
    transactions: &[TransactionRecord],
    latencies: &LatencyTable,
) -> Result<Vec<RankedTransaction>, PrioritizerError> {
    check_total_amount(transactions)?;

    let mut ranked = transactions
        .iter()
        .map(|record| rank_one(record, latencies))
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by is stable, so ties stay in input order
    ranked.sort_by(|a, b| b.density.cmp(&a.density));

    debug!(count = ranked.len(), "ranked transactions by density");
    Ok(ranked)
}

fn check_total_amount(transactions: &[TransactionRecord]) -> Result<(), PrioritizerError> {
    let mut total = Decimal::ZERO;
    for record in transactions {
        total = total
            .checked_add(record.amount.abs())
            .ok_or_else(|| PrioritizerError::value_overflow(&record.id))?;
    }
    Ok(())
}

fn rank_one(
    record: &TransactionRecord,
    latencies: &LatencyTable,
) -> Result<RankedTransaction, PrioritizerError> {
    let latency = latencies.get(&record.bank_country_code).ok_or_else(|| {
        PrioritizerError::invalid_latency(&record.id, &record.bank_country_code, None)
    })?;

    if latency <= Decimal::ZERO {
        return Err(PrioritizerError::invalid_latency(
            &record.id,
            &record.bank_country_code,
            Some(latency),
        ));
    }

    let density = record.amount.checked_div(latency).ok_or_else(|| {
        PrioritizerError::invalid_latency(&record.id, &record.bank_country_code, Some(latency))
    })?;

    Ok(RankedTransaction {
        record: record.clone(),
        latency,
        density,
    })
}
