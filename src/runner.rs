//! Prioritization run orchestration
//!
//! Ties the pieces together for the CLI:
//! 1. Loads the transaction CSV and the latency table
//! 2. Ranks and selects transactions once per configured budget
//! 3. Writes one summary line per budget to the output
//! 4. Optionally writes the admitted transactions to a CSV file
//!
//! Any error aborts the run before output is written, so a failed run never
//! prints partial results.

use crate::core::prioritize;
use crate::io::{load_latencies, load_transactions, write_selection_csv, write_summaries};
use crate::types::{LatencyTable, PrioritizerError, SelectionResult, TransactionRecord};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Budgets evaluated when none are configured, in milliseconds
pub const DEFAULT_BUDGETS: [i64; 4] = [50, 60, 90, 1000];

/// Default budgets as decimals
pub fn default_budgets() -> Vec<Decimal> {
    DEFAULT_BUDGETS.iter().map(|&b| Decimal::from(b)).collect()
}

/// Configuration for a prioritization run
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Path to the transaction CSV
    pub transactions_path: PathBuf,
    /// Path to the latency table JSON
    pub latencies_path: PathBuf,
    /// Time budgets to evaluate, in order
    pub budgets: Vec<Decimal>,
    /// Where to write the admitted transactions as CSV, if anywhere
    pub selected_output: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            transactions_path: PathBuf::from("transactions.csv"),
            latencies_path: PathBuf::from("api_latencies.json"),
            budgets: default_budgets(),
            selected_output: None,
        }
    }
}

/// Selection outcome for one budget
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetReport {
    pub budget: Decimal,
    pub selection: SelectionResult,
}

/// Prioritize already-loaded inputs for each budget
pub fn evaluate_budgets(
    transactions: &[TransactionRecord],
    latencies: &LatencyTable,
    budgets: &[Decimal],
) -> Result<Vec<BudgetReport>, PrioritizerError> {
    let mut reports = Vec::with_capacity(budgets.len());

    for &budget in budgets {
        let selection = prioritize(transactions, latencies, budget)?;
        info!(
            budget = %budget,
            admitted = selection.count(),
            total_value = %selection.total_value,
            consumed_time = %selection.consumed_time,
            "prioritized transactions"
        );
        reports.push(BudgetReport { budget, selection });
    }

    Ok(reports)
}

/// Execute a full run and write summaries to `output`
///
/// # Errors
///
/// Returns the first load, latency, or output error encountered.
pub fn run(
    config: &RunConfig,
    output: &mut dyn Write,
) -> Result<Vec<BudgetReport>, PrioritizerError> {
    let transactions = load_transactions(&config.transactions_path)?;
    let latencies = load_latencies(&config.latencies_path)?;

    let reports = evaluate_budgets(&transactions, &latencies, &config.budgets)?;

    write_summaries(&reports, output)?;

    if let Some(path) = &config.selected_output {
        let file = File::create(path).map_err(|e| {
            PrioritizerError::output(format!("failed to create '{}': {}", path.display(), e))
        })?;
        write_selection_csv(&reports, &mut BufWriter::new(file))?;
        info!(path = %path.display(), "wrote selected transactions");
    }

    Ok(reports)
}
