//! Latency table loader
//!
//! Reads the per-country API latency table from a JSON object whose keys are
//! bank country codes and whose values are latencies in milliseconds:
//!
//! ```json
//! { "US": 12, "DE": 7.5, "GB": 9 }
//! ```

use crate::types::{LatencyTable, PrioritizerError};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::info;

/// Load a latency table from a JSON file
///
/// # Errors
///
/// * `FileNotFound` if the path does not exist
/// * `IoError` if the file cannot be read
/// * `LatencyTableError` if the content is not a JSON object of numbers
pub fn load_latencies(path: &Path) -> Result<LatencyTable, PrioritizerError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PrioritizerError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => PrioritizerError::IoError {
            message: format!("failed to open '{}': {}", path.display(), e),
        },
    })?;

    let table = parse_latencies(BufReader::new(file))?;
    info!(
        path = %path.display(),
        countries = table.len(),
        "loaded latency table"
    );
    Ok(table)
}

/// Parse a latency table from any JSON reader
pub fn parse_latencies<R: Read>(reader: R) -> Result<LatencyTable, PrioritizerError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_integer_and_fractional_latencies() {
        let table = parse_latencies(r#"{"US": 12, "DE": 7.5}"#.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("US"), Some(Decimal::new(12, 0)));
        assert_eq!(table.get("DE"), Some(Decimal::new(75, 1)));
    }

    #[test]
    fn test_parse_keeps_non_positive_values() {
        let table = parse_latencies(r#"{"US": 0}"#.as_bytes()).unwrap();

        assert_eq!(table.get("US"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_parse_empty_object() {
        let table = parse_latencies("{}".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[rstest]
    #[case::truncated(r#"{"US": 12"#)]
    #[case::not_an_object(r#"[12, 7]"#)]
    #[case::boolean_value(r#"{"US": true}"#)]
    #[case::empty("")]
    fn test_parse_rejects_malformed_json(#[case] content: &str) {
        let result = parse_latencies(content.as_bytes());

        assert!(matches!(
            result,
            Err(PrioritizerError::LatencyTableError { .. })
        ));
    }

    #[test]
    fn test_load_latencies_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(br#"{"US": 10, "DE": 5}"#)
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let table = load_latencies(file.path()).unwrap();

        assert_eq!(table.get("DE"), Some(Decimal::new(5, 0)));
    }

    #[test]
    fn test_load_latencies_missing_file() {
        let result = load_latencies(Path::new("missing_latencies.json"));

        assert_eq!(
            result.unwrap_err(),
            PrioritizerError::FileNotFound {
                path: "missing_latencies.json".to_string()
            }
        );
    }
}
