//! Error types for the Transaction Prioritizer
//!
//! This module defines all error types that can occur while loading inputs,
//! ranking transactions, and writing reports. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Data load errors**: File not found, unreadable files, malformed CSV or JSON,
//!   invalid amounts, duplicate transaction IDs
//! - **Latency errors**: A transaction's country code has no usable latency
//! - **Overflow errors**: The batch's amounts exceed what a `Decimal` can total
//! - **Output errors**: The report could not be written
//!
//! None of these are recovered internally. Any error aborts the run.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the prioritizer
///
/// Each variant includes relevant context to help diagnose the failing input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrioritizerError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading an input file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// The whole load is rejected; there are no partial transaction lists.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Amount is malformed or negative
    #[error("Invalid amount '{amount}' for transaction {id}")]
    InvalidAmount {
        /// The offending amount as written in the input
        amount: String,
        /// Transaction ID
        id: String,
    },

    /// The same transaction ID appears more than once
    #[error("Duplicate transaction ID {id}")]
    DuplicateTransaction {
        /// Transaction ID that is duplicated
        id: String,
    },

    /// The latency table could not be parsed
    #[error("Invalid latency table: {message}")]
    LatencyTableError {
        /// Description of the JSON error
        message: String,
    },

    /// A transaction's country code has no usable latency
    ///
    /// Raised when the country code is missing from the latency table, when its
    /// latency is zero or negative, or when the resulting density cannot be
    /// represented. Fails the ranking of the whole batch.
    #[error(
        "Invalid latency for transaction {id} (country {country_code}): {}",
        latency.map(|l| format!("latency {} must be positive", l)).unwrap_or_else(|| "no latency configured".to_string())
    )]
    InvalidLatency {
        /// Transaction ID whose latency could not be resolved
        id: String,
        /// Country code that was looked up
        country_code: String,
        /// The configured latency, if any
        latency: Option<Decimal>,
    },

    /// The batch's amounts cannot be summed without overflowing
    ///
    /// Raised by ranking before any selection runs, naming the transaction at
    /// which the running total of absolute amounts overflowed.
    #[error("Total amount overflows at transaction {id}")]
    ValueOverflow {
        /// Transaction ID whose amount pushed the total out of range
        id: String,
    },

    /// The report could not be written
    #[error("Failed to write output: {message}")]
    OutputError {
        /// Description of the write failure
        message: String,
    },
}

// Conversion from io::Error to PrioritizerError
impl From<std::io::Error> for PrioritizerError {
    fn from(error: std::io::Error) -> Self {
        PrioritizerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to PrioritizerError
impl From<csv::Error> for PrioritizerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        PrioritizerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for PrioritizerError {
    fn from(error: serde_json::Error) -> Self {
        PrioritizerError::LatencyTableError {
            message: error.to_string(),
        }
    }
}

impl PrioritizerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, id: &str) -> Self {
        PrioritizerError::InvalidAmount {
            amount: amount.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a DuplicateTransaction error
    pub fn duplicate_transaction(id: &str) -> Self {
        PrioritizerError::DuplicateTransaction { id: id.to_string() }
    }

    /// Create an InvalidLatency error
    pub fn invalid_latency(id: &str, country_code: &str, latency: Option<Decimal>) -> Self {
        PrioritizerError::InvalidLatency {
            id: id.to_string(),
            country_code: country_code.to_string(),
            latency,
        }
    }

    /// Create a ValueOverflow error
    pub fn value_overflow(id: &str) -> Self {
        PrioritizerError::ValueOverflow { id: id.to_string() }
    }

    /// Create an OutputError
    pub fn output(message: impl std::fmt::Display) -> Self {
        PrioritizerError::OutputError {
            message: message.to_string(),
        }
    }

    /// Whether this error came from loading or parsing an input source
    pub fn is_data_load_error(&self) -> bool {
        matches!(
            self,
            PrioritizerError::FileNotFound { .. }
                | PrioritizerError::IoError { .. }
                | PrioritizerError::ParseError { .. }
                | PrioritizerError::InvalidAmount { .. }
                | PrioritizerError::DuplicateTransaction { .. }
                | PrioritizerError::LatencyTableError { .. }
        )
    }
}
