//! Latency table for the Transaction Prioritizer
//!
//! Maps bank country codes to the processing latency of that country's API.

use super::transaction::CountryCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Processing latency per bank country code, in milliseconds
///
/// Deserializes directly from a flat JSON object such as
/// `{"US": 12, "DE": 7.5}`. Values are not validated here; the ranker rejects
/// non-positive latencies for the country codes it actually resolves.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LatencyTable {
    latencies: HashMap<CountryCode, Decimal>,
}

impl LatencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the latency for a country code
    pub fn get(&self, country_code: &str) -> Option<Decimal> {
        self.latencies.get(country_code).copied()
    }

    /// Insert or replace the latency for a country code
    pub fn insert(&mut self, country_code: impl Into<CountryCode>, latency: Decimal) {
        self.latencies.insert(country_code.into(), latency);
    }

    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies.is_empty()
    }
}

impl<K: Into<CountryCode>> FromIterator<(K, Decimal)> for LatencyTable {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        LatencyTable {
            latencies: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
