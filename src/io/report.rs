//! Human-readable summary output
//!
//! One line per evaluated budget, e.g.
//!
//! ```text
//! You can do 3 transactions with a maxUSD of 1503.75 when using a totalTime of 50 mil seconds
//! ```

use crate::runner::BudgetReport;
use crate::types::PrioritizerError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

/// Render the summary line for a single budget
///
/// The total value is rounded half away from zero to two decimal places. The
/// budget is shown as given, with trailing zeros removed.
pub fn format_summary(count: usize, total_value: Decimal, budget: Decimal) -> String {
    format!(
        "You can do {} transactions with a maxUSD of {:.2} when using a totalTime of {} mil seconds",
        count,
        total_value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        budget.normalize()
    )
}

/// Write one summary line per budget report
pub fn write_summaries(
    reports: &[BudgetReport],
    output: &mut dyn Write,
) -> Result<(), PrioritizerError> {
    for report in reports {
        writeln!(
            output,
            "{}",
            format_summary(
                report.selection.count(),
                report.selection.total_value,
                report.budget
            )
        )
        .map_err(PrioritizerError::output)?;
    }

    output.flush().map_err(PrioritizerError::output)
}
