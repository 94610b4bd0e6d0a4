//! Transaction CSV reader with iterator interface
//!
//! Provides a streaming iterator over transaction records from a CSV file,
//! and [`load_transactions`] which collects a whole file into memory.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors, a missing or incomplete header
//!   row) are returned from `open()` and `from_reader()`
//! - Individual record errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging
//!
//! `load_transactions` stops at the first error of any kind: a transaction
//! file is either loaded completely or not at all.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{PrioritizerError, TransactionRecord};
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::info;

/// Columns every transaction CSV header must contain
pub const REQUIRED_COLUMNS: [&str; 3] = ["id", "amount", "bank_country_code"];

/// Transaction CSV reader
///
/// Yields one `Result<TransactionRecord, PrioritizerError>` per CSV row.
///
/// # Examples
///
/// ```no_run
/// use transaction_prioritizer::io::TransactionReader;
/// use std::path::Path;
///
/// let reader = TransactionReader::open(Path::new("transactions.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(record) => println!("Loaded transaction: {:?}", record),
///         Err(e) => eprintln!("Error: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
    line_num: u64,
}

impl TransactionReader<File> {
    /// Open a transaction CSV file
    ///
    /// The CSV reader is configured to trim whitespace from all fields and to
    /// use an 8KB buffer.
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if the path does not exist
    /// * `IoError` if the file could not be opened for any other reason
    /// * `ParseError` if the header row is missing or incomplete
    pub fn open(path: &Path) -> Result<Self, PrioritizerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PrioritizerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => PrioritizerError::IoError {
                message: format!("failed to open '{}': {}", path.display(), e),
            },
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> TransactionReader<R> {
    /// Wrap any reader producing CSV data with a header row
    ///
    /// # Errors
    ///
    /// Returns `ParseError` at line 1 if the input is empty or its header lacks
    /// one of [`REQUIRED_COLUMNS`].
    pub fn from_reader(reader: R) -> Result<Self, PrioritizerError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(reader);

        check_headers(reader.headers()?)?;

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

fn check_headers(headers: &csv::StringRecord) -> Result<(), PrioritizerError> {
    if headers.is_empty() {
        return Err(PrioritizerError::ParseError {
            line: Some(1),
            message: format!("missing header row, expected {}", REQUIRED_COLUMNS.join(",")),
        });
    }

    match REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        Some(column) => Err(PrioritizerError::ParseError {
            line: Some(1),
            message: format!("header is missing column '{}'", column),
        }),
        None => Ok(()),
    }
}

impl<R: Read> Iterator for TransactionReader<R> {
    type Item = Result<TransactionRecord, PrioritizerError>;

    /// Read the next transaction record
    ///
    /// Conversion errors are tagged with the line they came from (the header
    /// is line 1).
    fn next(&mut self) -> Option<Self::Item> {
        let next = self.reader.deserialize::<CsvRecord>().next()?;
        self.line_num += 1;

        Some(match next {
            Ok(csv_record) => convert_csv_record(csv_record).map_err(|e| match e {
                PrioritizerError::ParseError { line: None, message } => {
                    PrioritizerError::ParseError {
                        line: Some(self.line_num),
                        message,
                    }
                }
                other => other,
            }),
            Err(e) => Err(e.into()),
        })
    }
}

/// Load every transaction from a CSV file
///
/// # Errors
///
/// Returns the first error encountered: file errors, malformed rows, invalid
/// amounts, or a transaction ID that appears twice.
pub fn load_transactions(path: &Path) -> Result<Vec<TransactionRecord>, PrioritizerError> {
    let transactions = collect_transactions(TransactionReader::open(path)?)?;
    info!(
        path = %path.display(),
        count = transactions.len(),
        "loaded transactions"
    );
    Ok(transactions)
}

/// Collect records from a reader, rejecting duplicate IDs
pub fn collect_transactions<R: Read>(
    reader: TransactionReader<R>,
) -> Result<Vec<TransactionRecord>, PrioritizerError> {
    let mut seen = HashSet::new();
    let mut transactions = Vec::new();

    for result in reader {
        let record = result?;
        if !seen.insert(record.id.clone()) {
            return Err(PrioritizerError::duplicate_transaction(&record.id));
        }
        transactions.push(record);
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_str(content: &str) -> Vec<Result<TransactionRecord, PrioritizerError>> {
        TransactionReader::from_reader(content.as_bytes())
            .expect("valid header")
            .collect()
    }

    #[test]
    fn test_open_fails_on_missing_file() {
        let result = TransactionReader::open(Path::new("nonexistent.csv"));

        assert_eq!(
            result.unwrap_err(),
            PrioritizerError::FileNotFound {
                path: "nonexistent.csv".to_string()
            }
        );
    }

    #[test]
    fn test_reader_iterates_records_in_order() {
        let records = read_str("id,amount,bank_country_code\na,100.0,US\nb,50,DE\n");

        assert_eq!(records.len(), 2);
        let first = records[0].as_ref().unwrap();
        assert_eq!(first.id, "a");
        assert_eq!(first.amount, Decimal::new(1000, 1));
        assert_eq!(first.bank_country_code, "US");
        assert_eq!(records[1].as_ref().unwrap().id, "b");
    }

    #[test]
    fn test_reader_handles_whitespace() {
        let records = read_str("id,amount,bank_country_code\n  a  ,  12.5  ,  US  \n");

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.id, "a");
        assert_eq!(record.amount, Decimal::new(125, 1));
        assert_eq!(record.bank_country_code, "US");
    }

    #[test]
    fn test_reader_reports_line_numbers() {
        let records = read_str("id,amount,bank_country_code\na,1,US\n,2,US\n");

        assert!(records[0].is_ok());
        assert_eq!(
            records[1].as_ref().unwrap_err(),
            &PrioritizerError::ParseError {
                line: Some(3),
                message: "transaction id is empty".to_string()
            }
        );
    }

    #[test]
    fn test_reader_rejects_missing_column() {
        let records = read_str("id,amount,bank_country_code\na,1\n");

        assert!(matches!(
            records[0],
            Err(PrioritizerError::ParseError { .. })
        ));
    }

    #[test]
    fn test_reader_empty_file_after_header() {
        let records = read_str("id,amount,bank_country_code\n");
        assert!(records.is_empty());
    }

    #[test]
    fn test_from_reader_rejects_empty_input() {
        let result = TransactionReader::from_reader("".as_bytes());

        assert_eq!(
            result.unwrap_err(),
            PrioritizerError::ParseError {
                line: Some(1),
                message: "missing header row, expected id,amount,bank_country_code".to_string()
            }
        );
    }

    #[test]
    fn test_from_reader_rejects_incomplete_header() {
        let csv = "id,value,bank_country_code\na,1,US\n";

        let result = TransactionReader::from_reader(csv.as_bytes());

        assert_eq!(
            result.unwrap_err(),
            PrioritizerError::ParseError {
                line: Some(1),
                message: "header is missing column 'amount'".to_string()
            }
        );
    }

    #[test]
    fn test_from_reader_accepts_reordered_header() {
        let records = read_str("bank_country_code,id,amount\nUS,a,5\n");

        assert_eq!(records[0].as_ref().unwrap().id, "a");
    }

    #[test]
    fn test_load_transactions_rejects_empty_file() {
        let file = create_temp_csv("");

        let error = load_transactions(file.path()).unwrap_err();

        assert!(error.is_data_load_error());
        assert!(matches!(error, PrioritizerError::ParseError { line: Some(1), .. }));
    }

    #[test]
    fn test_load_transactions_from_file() {
        let file = create_temp_csv("id,amount,bank_country_code\na,10,US\nb,20,DE\nc,30,US\n");

        let transactions = load_transactions(file.path()).unwrap();

        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[2].id, "c");
    }

    #[test]
    fn test_load_transactions_stops_on_first_error() {
        let file = create_temp_csv("id,amount,bank_country_code\na,10,US\nb,invalid,DE\nc,30,US\n");

        let result = load_transactions(file.path());

        assert_eq!(
            result.unwrap_err(),
            PrioritizerError::invalid_amount("invalid", "b")
        );
    }

    #[test]
    fn test_load_transactions_rejects_duplicate_ids() {
        let file = create_temp_csv("id,amount,bank_country_code\na,10,US\na,20,DE\n");

        let result = load_transactions(file.path());

        assert_eq!(
            result.unwrap_err(),
            PrioritizerError::duplicate_transaction("a")
        );
    }
}
