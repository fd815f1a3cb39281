use std::str::FromStr;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use crate::common::{Result, TransferError};

lazy_static! {
    static ref YYYYMMDD: Regex = Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap();
    static ref YYYYMMDD_DOT: Regex = Regex::new(r"^\d{4}\.\d{1,2}\.\d{1,2}$").unwrap();
    static ref YYYYMMDD_SLASH: Regex = Regex::new(r"^\d{4}/\d{1,2}/\d{1,2}$").unwrap();
    static ref DDMMYYYY_SLASH: Regex = Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap();
    static ref DDMMYYYY_DOT: Regex = Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").unwrap();
    static ref YYYYMMDD_T_HHMMSS: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2})?.*$").unwrap();
}

/// Parse a calendar date. With `format` given only that chrono format is tried,
/// otherwise the date shapes seen in bank exports are recognised. Slash and dot
/// separated dates with the year last are read day first (`03/05/2021` is 3 May),
/// as European bank exports write them; month-first files need a `date_format`.
pub fn parse_date(s: &str, format: Option<&str>) -> Result<NaiveDate> {
    let s = s.trim();
    let parsed = match format {
        Some(format) => NaiveDate::parse_from_str(s, format),
        None => {
            if YYYYMMDD.is_match(s) {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
            } else if YYYYMMDD_T_HHMMSS.is_match(s) {
                NaiveDate::parse_from_str(&s[0..10], "%Y-%m-%d")
            } else if YYYYMMDD_DOT.is_match(s) {
                NaiveDate::parse_from_str(s, "%Y.%m.%d")
            } else if YYYYMMDD_SLASH.is_match(s) {
                NaiveDate::parse_from_str(s, "%Y/%m/%d")
            } else if DDMMYYYY_SLASH.is_match(s) {
                NaiveDate::parse_from_str(s, "%d/%m/%Y")
            } else if DDMMYYYY_DOT.is_match(s) {
                NaiveDate::parse_from_str(s, "%d.%m.%Y")
            } else {
                return Err(TransferError::ParseError(format!("Unrecognised date '{}'", s)));
            }
        }
    };

    parsed.map_err(|e| TransferError::ParseError(format!("Invalid date '{}': {}", s, e)))
}

/// Parse a decimal amount. Spaces are thousand separators. A ',' is the decimal point
/// when the value has no '.', so `1,234` reads as 1.234; with a '.' present commas are
/// thousand separators and `1,234.50` reads as 1234.50.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = if cleaned.contains(',') && !cleaned.contains('.') {
        cleaned.replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };

    if cleaned.is_empty() {
        return Err(TransferError::ParseError("Empty amount".to_string()));
    }

    Decimal::from_str(&cleaned)
        .map_err(|e| TransferError::ParseError(format!("Invalid amount '{}': {}", s.trim(), e)))
}
