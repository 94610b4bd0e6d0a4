//! Transaction-related types for the Transaction Prioritizer
//!
//! This module defines the loaded transaction record and the ranked wrapper
//! produced by the density ranker.

use rust_decimal::Decimal;

/// Transaction identifier
///
/// Identifiers are opaque strings taken verbatim from the input file.
pub type TransactionId = String;

/// Country code of the originating bank
///
/// Used as the key into the [`LatencyTable`](super::LatencyTable).
pub type CountryCode = String;

/// Input transaction record from CSV
///
/// Represents a single transaction as read from the input CSV file.
/// Records are read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Unique transaction identifier
    pub id: TransactionId,

    /// Transaction amount in USD (never negative)
    pub amount: Decimal,

    /// Country code of the bank that originated the transaction
    pub bank_country_code: CountryCode,
}

impl TransactionRecord {
    pub fn new(
        id: impl Into<TransactionId>,
        amount: Decimal,
        bank_country_code: impl Into<CountryCode>,
    ) -> Self {
        TransactionRecord {
            id: id.into(),
            amount,
            bank_country_code: bank_country_code.into(),
        }
    }
}

/// A transaction paired with its resolved latency and value density
///
/// Produced by [`rank`](crate::core::rank). The density is the amount of money
/// moved per millisecond of processing latency and is the ranking key.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTransaction {
    /// The underlying transaction record
    pub record: TransactionRecord,

    /// Processing latency for the record's country (always positive)
    pub latency: Decimal,

    /// `amount / latency`
    pub density: Decimal,
}

impl RankedTransaction {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn amount(&self) -> Decimal {
        self.record.amount
    }
}
