//! CSV format handling for transaction records and selection output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Selection output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::runner::BudgetReport;
use crate::types::{PrioritizerError, TransactionRecord};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: id, amount, bank_country_code.
/// The amount is kept as a string so malformed values can be reported verbatim.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: String,
    pub amount: String,
    pub bank_country_code: String,
}

/// Convert a CsvRecord to a TransactionRecord
///
/// This function:
/// - Trims all fields
/// - Rejects empty IDs and empty country codes
/// - Parses the amount into a Decimal, rejecting malformed or negative values
///
/// # Errors
///
/// Returns `ParseError` for empty fields and `InvalidAmount` for bad amounts.
/// Line numbers are attached by the caller.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<TransactionRecord, PrioritizerError> {
    let id = csv_record.id.trim();
    if id.is_empty() {
        return Err(PrioritizerError::ParseError {
            line: None,
            message: "transaction id is empty".to_string(),
        });
    }

    let bank_country_code = csv_record.bank_country_code.trim();
    if bank_country_code.is_empty() {
        return Err(PrioritizerError::ParseError {
            line: None,
            message: format!("bank_country_code is empty for transaction {}", id),
        });
    }

    let amount = Decimal::from_str(csv_record.amount.trim())
        .map_err(|_| PrioritizerError::invalid_amount(&csv_record.amount, id))?;
    if amount < Decimal::ZERO {
        return Err(PrioritizerError::invalid_amount(&csv_record.amount, id));
    }

    Ok(TransactionRecord::new(id, amount, bank_country_code))
}

/// Round half away from zero to `dp` places and render with exactly that many
fn format_rounded(value: Decimal, dp: u32) -> String {
    format!(
        "{:.*}",
        dp as usize,
        value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Write admitted transactions to CSV format
///
/// Writes one row per admitted transaction, grouped by budget in the order the
/// budgets were evaluated, with columns:
/// budget, id, amount, bank_country_code, latency, density
///
/// Amounts are rounded to 2 places and densities to 4, half away from zero.
///
/// # Errors
///
/// Returns `OutputError` if a write fails.
pub fn write_selection_csv(
    reports: &[BudgetReport],
    output: &mut dyn Write,
) -> Result<(), PrioritizerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "budget",
            "id",
            "amount",
            "bank_country_code",
            "latency",
            "density",
        ])
        .map_err(|e| PrioritizerError::output(format!("failed to write CSV header: {}", e)))?;

    for report in reports {
        for ranked in &report.selection.admitted {
            writer
                .write_record(&[
                    report.budget.to_string(),
                    ranked.record.id.clone(),
                    format_rounded(ranked.record.amount, 2),
                    ranked.record.bank_country_code.clone(),
                    ranked.latency.to_string(),
                    format_rounded(ranked.density, 4),
                ])
                .map_err(|e| {
                    PrioritizerError::output(format!("failed to write selection record: {}", e))
                })?;
        }
    }

    writer
        .flush()
        .map_err(|e| PrioritizerError::output(format!("failed to flush output: {}", e)))?;

    Ok(())
}
