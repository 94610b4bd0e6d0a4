use crate::runner::{default_budgets, RunConfig};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::warn;

/// Select the most valuable transactions that fit within processing time budgets
#[derive(Parser, Debug)]
#[command(name = "transaction-prioritizer")]
#[command(
    about = "Select the most valuable transactions that fit within processing time budgets",
    long_about = None
)]
pub struct CliArgs {
    /// Input CSV file containing transaction records
    #[arg(
        long = "transactions",
        value_name = "PATH",
        default_value = "transactions.csv",
        help = "Path to the transactions CSV (columns: id, amount, bank_country_code)"
    )]
    pub transactions: PathBuf,

    /// JSON file mapping bank country codes to API latencies
    #[arg(
        long = "latencies",
        value_name = "PATH",
        default_value = "api_latencies.json",
        help = "Path to the API latency table JSON"
    )]
    pub latencies: PathBuf,

    /// Time budgets to evaluate (repeatable)
    #[arg(
        long = "budget",
        value_name = "MS",
        help = "Time budget in milliseconds; repeat for several (default: 50, 60, 90, 1000)"
    )]
    pub budgets: Vec<Decimal>,

    /// Optional CSV output of the admitted transactions
    #[arg(
        long = "selected-output",
        value_name = "PATH",
        help = "Write the admitted transactions for every budget to this CSV file"
    )]
    pub selected_output: Option<PathBuf>,
}

impl CliArgs {
    /// Create a RunConfig from CLI arguments
    ///
    /// Negative budgets are dropped with a warning. If no usable budget
    /// remains, the default budgets are used.
    pub fn to_run_config(&self) -> RunConfig {
        let mut budgets: Vec<Decimal> = self
            .budgets
            .iter()
            .copied()
            .filter(|budget| {
                if *budget < Decimal::ZERO {
                    warn!(budget = %budget, "ignoring negative budget");
                    false
                } else {
                    true
                }
            })
            .collect();

        if budgets.is_empty() {
            if !self.budgets.is_empty() {
                warn!("no usable budgets given, using defaults");
            }
            budgets = default_budgets();
        }

        RunConfig {
            transactions_path: self.transactions.clone(),
            latencies_path: self.latencies.clone(),
            budgets,
            selected_output: self.selected_output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decimals(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|&v| Decimal::from(v)).collect()
    }

    #[rstest]
    #[case::defaults(&["program"], "transactions.csv", "api_latencies.json")]
    #[case::custom_paths(
        &["program", "--transactions", "in.csv", "--latencies", "lat.json"],
        "in.csv",
        "lat.json"
    )]
    fn test_path_options(
        #[case] args: &[&str],
        #[case] transactions: &str,
        #[case] latencies: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.transactions, PathBuf::from(transactions));
        assert_eq!(parsed.latencies, PathBuf::from(latencies));
        assert_eq!(parsed.selected_output, None);
    }

    #[rstest]
    #[case::no_budgets(&["program"], vec![50, 60, 90, 1000])]
    #[case::single_budget(&["program", "--budget", "75"], vec![75])]
    #[case::repeated_budgets(&["program", "--budget", "10", "--budget", "0", "--budget", "20"], vec![10, 0, 20])]
    #[case::negative_dropped(&["program", "--budget=-5", "--budget", "30"], vec![30])]
    #[case::only_negative_falls_back(&["program", "--budget=-5"], vec![50, 60, 90, 1000])]
    fn test_budget_config_conversion(#[case] args: &[&str], #[case] expected: Vec<i64>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_run_config();

        assert_eq!(config.budgets, decimals(&expected));
    }

    #[test]
    fn test_fractional_budget() {
        let parsed = CliArgs::try_parse_from(["program", "--budget", "12.5"]).unwrap();
        assert_eq!(parsed.budgets, vec![Decimal::new(125, 1)]);
    }

    #[test]
    fn test_selected_output_conversion() {
        let parsed =
            CliArgs::try_parse_from(["program", "--selected-output", "selected.csv"]).unwrap();
        let config = parsed.to_run_config();

        assert_eq!(config.selected_output, Some(PathBuf::from("selected.csv")));
    }

    #[rstest]
    #[case::invalid_budget(&["program", "--budget", "fast"])]
    #[case::missing_budget_value(&["program", "--budget"])]
    #[case::unknown_flag(&["program", "--verbose"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
