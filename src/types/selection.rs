//! Selection result produced by the budget selector

use super::transaction::RankedTransaction;
use rust_decimal::Decimal;

/// Transactions admitted within a single time budget
///
/// `admitted` is always a prefix of the ranked sequence it was selected from,
/// in descending-density order. `consumed_time` never exceeds the budget.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    /// Admitted transactions, in admission order
    pub admitted: Vec<RankedTransaction>,

    /// Sum of admitted amounts
    pub total_value: Decimal,

    /// Sum of admitted latencies
    pub consumed_time: Decimal,
}

impl SelectionResult {
    /// An empty selection (nothing admitted, zero value)
    pub fn empty() -> Self {
        SelectionResult {
            admitted: Vec::new(),
            total_value: Decimal::ZERO,
            consumed_time: Decimal::ZERO,
        }
    }

    /// Number of admitted transactions
    pub fn count(&self) -> usize {
        self.admitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admitted.is_empty()
    }
}

impl Default for SelectionResult {
    fn default() -> Self {
        Self::empty()
    }
}
