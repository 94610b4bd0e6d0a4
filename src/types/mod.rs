//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction records and their ranked form
//! - `latency`: Country code to latency lookup table
//! - `selection`: Result of selecting transactions within a budget
//! - `error`: Error types for the prioritizer

pub mod error;
pub mod latency;
pub mod selection;
pub mod transaction;

pub use error::PrioritizerError;
pub use latency::LatencyTable;
pub use selection::SelectionResult;
pub use transaction::{CountryCode, RankedTransaction, TransactionId, TransactionRecord};
