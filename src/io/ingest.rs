//! CSV ingest.
//!
//! Header handling:
//!
//! - headers are matched case-insensitively, with a UTF-8 BOM stripped from
//!   the first header
//! - canonical columns are `date`, `sales`, `region`, `category`, `product`,
//!   `profit`; anything else is carried through as an extra column
//!
//! Cell handling is deliberately forgiving. Bad cells degrade rather than
//! abort the load: an unparseable date or profit becomes a missing value and
//! a non-numeric sales cell becomes 0, each recorded as a [`RowError`] so
//! the run summary can report data quality.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{ColumnSet, Dataset, Record};
use crate::error::AppError;

/// Date formats accepted on ingest, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// A non-fatal cell problem, reported per input line.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line number in the input (header is line 1).
    pub line: usize,
    pub message: String,
}

/// The result of a CSV load: the dataset plus data-quality bookkeeping.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub dataset: Dataset,
    /// Data rows read, including ones that produced errors.
    pub rows_read: usize,
    pub row_errors: Vec<RowError>,
}

/// Read a CSV dataset from any reader.
///
/// Fails only on structural problems (unreadable input, no header, no data
/// rows, or a missing Sales column); cell-level problems degrade into
/// [`RowError`]s.
pub fn read_dataset<R: Read>(reader: R) -> Result<IngestedData, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV header: {e}")))?
        .clone();

    // Map lowercased header name -> column index, stripping a BOM from the
    // first header if present.
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut columns = ColumnSet::default();
    let mut extra_indices: Vec<usize> = Vec::new();
    for (i, raw) in headers.iter().enumerate() {
        let name = raw.trim_start_matches('\u{feff}').trim().to_lowercase();
        match name.as_str() {
            "date" => columns.date = true,
            "sales" => columns.sales = true,
            "region" => columns.region = true,
            "category" => columns.category = true,
            "product" => columns.product = true,
            "profit" => columns.profit = true,
            _ => {
                columns.extras.push(raw.trim().to_string());
                extra_indices.push(i);
            }
        }
        index.insert(name, i);
    }

    if !columns.sales {
        return Err(AppError::input(
            "CSV is missing the required 'Sales' column".to_string(),
        ));
    }

    let get = |record: &csv::StringRecord, name: &str| -> Option<String> {
        index
            .get(name)
            .and_then(|&i| record.get(i))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (row_idx, row) in csv_reader.records().enumerate() {
        let line = row_idx + 2;
        rows_read += 1;
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("Unreadable row: {e}"),
                });
                continue;
            }
        };

        let date = match get(&row, "date") {
            Some(raw) => {
                let parsed = parse_date(&raw);
                if parsed.is_none() {
                    row_errors.push(RowError {
                        line,
                        message: format!("Unparseable date '{raw}'"),
                    });
                }
                parsed
            }
            None => None,
        };

        let sales = match get(&row, "sales") {
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    row_errors.push(RowError {
                        line,
                        message: format!("Non-numeric sales '{raw}'; using 0"),
                    });
                    0.0
                }
            },
            None => 0.0,
        };

        let profit = match get(&row, "profit") {
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    row_errors.push(RowError {
                        line,
                        message: format!("Non-numeric profit '{raw}'"),
                    });
                    None
                }
            },
            None => None,
        };

        let extras = extra_indices
            .iter()
            .map(|&i| row.get(i).unwrap_or("").trim().to_string())
            .collect();

        records.push(Record {
            date,
            sales,
            region: get(&row, "region"),
            category: get(&row, "category"),
            product: get(&row, "product"),
            profit,
            extras,
        });
    }

    if records.is_empty() {
        return Err(AppError::no_data("CSV contains no data rows".to_string()));
    }

    Ok(IngestedData {
        dataset: Dataset { columns, records },
        rows_read,
        row_errors,
    })
}

/// Load a dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open {}: {e}", path.display())))?;
    read_dataset(file)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ingest(csv_text: &str) -> IngestedData {
        read_dataset(Cursor::new(csv_text)).unwrap()
    }

    #[test]
    fn parses_canonical_columns_case_insensitively() {
        let data = ingest(
            "DATE,Sales,region,Category\n\
             2024-01-05,100.5,North,Electronics\n\
             2024-01-06,200,South,Clothing\n",
        );
        assert_eq!(data.rows_read, 2);
        assert!(data.row_errors.is_empty());

        let cols = &data.dataset.columns;
        assert!(cols.date && cols.sales && cols.region && cols.category);
        assert!(!cols.product && !cols.profit);

        let first = &data.dataset.records[0];
        assert_eq!(first.date.unwrap().to_string(), "2024-01-05");
        assert_eq!(first.sales, 100.5);
        assert_eq!(first.region.as_deref(), Some("North"));
    }

    #[test]
    fn strips_bom_from_first_header() {
        let data = ingest("\u{feff}Date,Sales\n2024-02-01,50\n");
        assert!(data.dataset.columns.date);
    }

    #[test]
    fn accepts_multiple_date_formats() {
        let data = ingest(
            "Date,Sales\n\
             2024-01-05,1\n\
             05/02/2024,1\n\
             05-03-2024,1\n\
             2024/04/05,1\n",
        );
        let dates: Vec<String> = data
            .dataset
            .records
            .iter()
            .map(|r| r.date.unwrap().to_string())
            .collect();
        assert_eq!(dates, vec!["2024-01-05", "2024-02-05", "2024-03-05", "2024-04-05"]);
    }

    #[test]
    fn bad_cells_degrade_with_row_errors() {
        let data = ingest(
            "Date,Sales,Profit\n\
             not-a-date,abc,xyz\n\
             2024-01-02,75,12.5\n",
        );
        assert_eq!(data.rows_read, 2);
        assert_eq!(data.row_errors.len(), 3);
        assert!(data.row_errors.iter().all(|e| e.line == 2));

        let bad = &data.dataset.records[0];
        assert_eq!(bad.date, None);
        assert_eq!(bad.sales, 0.0);
        assert_eq!(bad.profit, None);

        let good = &data.dataset.records[1];
        assert_eq!(good.sales, 75.0);
        assert_eq!(good.profit, Some(12.5));
    }

    #[test]
    fn unknown_columns_pass_through_as_extras() {
        let data = ingest("Date,Sales,Store Id\n2024-01-01,10,S-17\n");
        assert_eq!(data.dataset.columns.extras, vec!["Store Id".to_string()]);
        assert_eq!(data.dataset.records[0].extras, vec!["S-17".to_string()]);
    }

    #[test]
    fn missing_sales_column_is_fatal() {
        let err = read_dataset(Cursor::new("Date,Region\n2024-01-01,North\n")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_body_is_fatal() {
        let err = read_dataset(Cursor::new("Date,Sales\n")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
