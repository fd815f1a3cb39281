mod column;

use std::path::Path;
use csv::StringRecord;
use log::{info, warn};
use crate::common::{Result, TransferError};
use crate::config::{Codes, Config};
use crate::csv_reader::column::{clean_cell, parse_csv_column_with_header, ColumnInfo};
use crate::transaction::{Transaction, TransferType};
use crate::transfers::Transfers;
use crate::util::{parse_amount, parse_date};

/// Read transfers from a Swedbank CSV export using the default config.
pub fn read_transfers<P: AsRef<Path>>(file_path: P) -> Result<Transfers> {
    read_transfers_with(file_path, &Config::default())
}

/// Read transfers from a CSV export, locating columns and codes as described by `config`.
pub fn read_transfers_with<P: AsRef<Path>>(file_path: P, config: &Config) -> Result<Transfers> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(TransferError::IoError(format!("File not found: {}", file_path.display())));
    }

    info!("Reading transfers from {:?}", file_path);
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(config.delimiter)?)
        .flexible(true)
        .from_path(file_path)?;

    let column_info = parse_csv_column_with_header(rdr.headers()?, &config.columns)?;

    let mut transactions: Vec<Transaction> = vec![];
    for (i, record) in rdr.records().enumerate() {
        let row = record?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row_number = i + 1;
        let transaction = parse_row(&row, &column_info, config)
            .map_err(|e| at_row(e, row_number))?;
        transactions.push(transaction);
    }

    info!("Loaded {} transfers", transactions.len());
    Ok(Transfers::new(transactions))
}

fn parse_row(row: &StringRecord, column_info: &ColumnInfo, config: &Config) -> Result<Transaction> {
    if row.len() <= column_info.last_column() {
        return Err(TransferError::FormatError(
            format!("Expected at least {} columns but found {}", column_info.last_column() + 1, row.len())));
    }

    let transfer_type = parse_type(&clean_cell(&row[column_info.type_column]), &config.codes)?;
    let date = parse_date(&clean_cell(&row[column_info.date_column]), config.date_format.as_deref())?;
    let magnitude = parse_amount(&clean_cell(&row[column_info.amount_column]))?;
    if magnitude.is_sign_negative() && !magnitude.is_zero() {
        warn!("Negative amount {} in a {} row, using its magnitude", magnitude, transfer_type);
    }
    let reason = clean_cell(&row[column_info.reason_column]);

    Ok(Transaction::new(date, &reason, magnitude, transfer_type))
}

fn parse_type(code: &str, codes: &Codes) -> Result<TransferType> {
    let code = code.trim();
    if code == codes.credit.trim() {
        Ok(TransferType::Credit)
    } else if code == codes.debit.trim() {
        Ok(TransferType::Debit)
    } else {
        Err(TransferError::FormatError(format!(
            "Unknown direction code '{}', expected '{}' or '{}'", code, codes.credit, codes.debit)))
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(TransferError::FormatError(format!("Delimiter '{}' is not an ASCII character", delimiter)))
    }
}

fn at_row(e: TransferError, row_number: usize) -> TransferError {
    match e {
        TransferError::FormatError(s) => TransferError::FormatError(format!("row {}: {}", row_number, s)),
        TransferError::ParseError(s) => TransferError::ParseError(format!("row {}: {}", row_number, s)),
        TransferError::IoError(s) => TransferError::IoError(s),
    }
}
