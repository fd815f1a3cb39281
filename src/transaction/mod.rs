use std::fmt;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Direction of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferType {
    /// Money received
    Credit,
    /// Money paid out
    Debit,
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransferType::Credit => write!(f, "credit"),
            TransferType::Debit => write!(f, "debit"),
        }
    }
}

/// A normalised transfer row. Amount is negative for debits and positive for credits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub reason: String,
    pub amount: Decimal,
    pub transfer_type: TransferType,
}

impl Transaction {
    /// Builds a transaction from an unsigned magnitude, applying the sign of the transfer type.
    pub fn new(date: NaiveDate, reason: &str, magnitude: Decimal, transfer_type: TransferType) -> Transaction {
        let magnitude = magnitude.abs();
        let amount = match transfer_type {
            TransferType::Debit if !magnitude.is_zero() => -magnitude,
            _ => magnitude,
        };
        Transaction {
            date,
            reason: reason.to_string(),
            amount,
            transfer_type,
        }
    }

    pub fn is_debit(&self) -> bool {
        self.transfer_type == TransferType::Debit
    }
}
