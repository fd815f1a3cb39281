use csv::StringRecord;
use log::debug;
use crate::common::{Result, TransferError};
use crate::config::Columns;

/// Contains column index of the four required columns of a transfer export.
/// The column number uses 0-based index.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ColumnInfo {
    pub(crate) date_column: usize,
    pub(crate) reason_column: usize,
    pub(crate) amount_column: usize,
    pub(crate) type_column: usize,
}

impl ColumnInfo {
    /// Highest index among the required columns
    pub(crate) fn last_column(&self) -> usize {
        self.date_column.max(self.reason_column).max(self.amount_column).max(self.type_column)
    }
}

/// Resolve required columns from the header row. Fails listing every column that
/// could not be located.
pub(crate) fn parse_csv_column_with_header(headers: &StringRecord, columns: &Columns) -> Result<ColumnInfo> {
    let date_column = find_column(headers, &columns.date);
    let reason_column = find_column(headers, &columns.reason);
    let amount_column = find_column(headers, &columns.amount);
    let type_column = find_column(headers, &columns.transfer_type);

    match (date_column, reason_column, amount_column, type_column) {
        (Some(date_column), Some(reason_column), Some(amount_column), Some(type_column)) => {
            let info = ColumnInfo { date_column, reason_column, amount_column, type_column };
            debug!("Resolved columns {:?}", info);
            Ok(info)
        },
        _ => {
            let mut missing = vec![];
            for (index, names) in [
                (date_column, &columns.date),
                (reason_column, &columns.reason),
                (amount_column, &columns.amount),
                (type_column, &columns.transfer_type),
            ] {
                if index.is_none() {
                    missing.push(format!("'{}'", names.join("' or '")));
                }
            }
            Err(TransferError::FormatError(format!("Unable to locate column {}", missing.join(", "))))
        }
    }
}

/// First header whose name equals one of `names`, ignoring case, surrounding whitespace
/// and a byte order mark.
fn find_column(headers: &StringRecord, names: &[String]) -> Option<usize> {
    headers.iter()
        .map(normalise_header)
        .position(|header| names.iter().any(|name| normalise_header(name) == header))
}

fn normalise_header(s: &str) -> String {
    clean_cell(s.trim_start_matches('\u{feff}')).to_lowercase()
}

/// Trimmed cell text. A field written as `a, "b"` keeps its quotes after the csv
/// parser (quoting only counts at the very start of a field), so one surrounding
/// pair is removed here and doubled quotes inside are unescaped.
pub(crate) fn clean_cell(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        s[1..s.len() - 1].replace("\"\"", "\"")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swedbank_header() {
        let headers = StringRecord::from(vec!["Sąskaitos Nr.", "", "Data", "Gavėjas", "Paaiškinimai", "Suma", "Valiuta", "D/K"]);
        let info = parse_csv_column_with_header(&headers, &Columns::default()).unwrap();
        assert_eq!(info, ColumnInfo { date_column: 2, reason_column: 4, amount_column: 5, type_column: 7 });
        assert_eq!(info.last_column(), 7);
    }

    #[test]
    fn test_header_matching_ignores_case_and_bom() {
        let headers = StringRecord::from(vec!["\u{feff}data", " EXPLANATION ", "suma", "d/k"]);
        let info = parse_csv_column_with_header(&headers, &Columns::default()).unwrap();
        assert_eq!(info, ColumnInfo { date_column: 0, reason_column: 1, amount_column: 2, type_column: 3 });
    }

    #[test]
    fn test_header_with_spaced_quotes() {
        let headers = StringRecord::from(vec!["Data", " \"Explanation\"", " Suma", " D/K"]);
        let info = parse_csv_column_with_header(&headers, &Columns::default()).unwrap();
        assert_eq!(info, ColumnInfo { date_column: 0, reason_column: 1, amount_column: 2, type_column: 3 });
    }

    #[test]
    fn test_clean_cell() {
        assert_eq!(clean_cell(" \"Grocery\""), "Grocery");
        assert_eq!(clean_cell("  Grocery "), "Grocery");
        assert_eq!(clean_cell(" \"Say \"\"hi\"\"\" "), "Say \"hi\"");
        assert_eq!(clean_cell("\""), "\"");
        assert_eq!(clean_cell(""), "");
    }

    #[test]
    fn test_missing_columns_are_listed() {
        let headers = StringRecord::from(vec!["Data", "Explanation"]);
        let result = parse_csv_column_with_header(&headers, &Columns::default());
        match result {
            Err(TransferError::FormatError(msg)) => {
                assert!(msg.contains("'Suma' or 'Amount'"), "{}", msg);
                assert!(msg.contains("'D/K'"), "{}", msg);
                assert!(!msg.contains("Data"), "{}", msg);
            },
            other => panic!("Unexpected result {:?}", other)
        }
    }
}
