mod table;

use std::io::{self, Write};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use crate::common::Result;
use crate::config::PrintFormat;
use crate::transaction::Transaction;
use crate::util::parse_date;

/// Ordered, immutable set of transfers. Every filter returns a new `Transfers`
/// and keeps the relative order of the surviving rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transfers {
    transactions: Vec<Transaction>,
}

impl Transfers {
    pub fn new(transactions: Vec<Transaction>) -> Transfers {
        Transfers { transactions }
    }

    /// Transfers where money was paid out
    pub fn paid(&self) -> Transfers {
        self.filter(|t| t.amount < Decimal::ZERO)
    }

    /// Transfers where money was received
    pub fn received(&self) -> Transfers {
        self.filter(|t| t.amount > Decimal::ZERO)
    }

    /// Transfers whose reason contains `pattern` as a literal, case-sensitive substring.
    pub fn matching(&self, pattern: &str) -> Transfers {
        self.filter(|t| t.reason.contains(pattern))
    }

    /// Transfers whose reason has a match of `regex` anywhere in it.
    pub fn matching_regex(&self, regex: &Regex) -> Transfers {
        self.filter(|t| regex.is_match(&t.reason))
    }

    /// Complement of [`Transfers::matching`]
    pub fn excluding(&self, pattern: &str) -> Transfers {
        self.filter(|t| !t.reason.contains(pattern))
    }

    /// Transfers dated between `start_date` and `end_date`, both inclusive.
    /// Fails if either bound is not a valid date.
    pub fn within(&self, start_date: &str, end_date: &str) -> Result<Transfers> {
        self.within_with(start_date, end_date, None)
    }

    /// Like [`Transfers::within`], with bounds that may be written in the export's own
    /// `date_format`. Bounds not in that format fall back to the built-in date shapes.
    pub fn within_with(&self, start_date: &str, end_date: &str, date_format: Option<&str>) -> Result<Transfers> {
        let start_date = parse_bound(start_date, date_format)?;
        let end_date = parse_bound(end_date, date_format)?;
        Ok(self.within_dates(start_date, end_date))
    }

    /// Like [`Transfers::within`] with parsed bounds. An inverted range is empty.
    pub fn within_dates(&self, start_date: NaiveDate, end_date: NaiveDate) -> Transfers {
        self.filter(|t| start_date <= t.date && t.date <= end_date)
    }

    /// Pretty print transfers to stdout, one per line.
    pub fn print(&self, format: &PrintFormat) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, format)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W, format: &PrintFormat) -> io::Result<()> {
        for t in &self.transactions {
            writeln!(writer, "{} {} {}", t.date.format("%Y-%m-%d"), format_amount(t.amount, format), t.reason)?;
        }
        Ok(())
    }

    /// Read-only view of the underlying rows
    pub fn raw_records(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    fn filter<F: Fn(&Transaction) -> bool>(&self, predicate: F) -> Transfers {
        Transfers::new(self.transactions.iter().filter(|t| predicate(*t)).cloned().collect())
    }
}

fn parse_bound(s: &str, date_format: Option<&str>) -> Result<NaiveDate> {
    match date_format {
        Some(format) => parse_date(s, Some(format)).or_else(|_| parse_date(s, None)),
        None => parse_date(s, None),
    }
}

impl<'a> IntoIterator for &'a Transfers {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

/// Right-aligned amount with fixed decimal places, e.g. ` -15.50`
pub(crate) fn format_amount(amount: Decimal, format: &PrintFormat) -> String {
    let precision = format.precision as usize;
    let amount = amount.round_dp(format.precision);
    let value = if format.plus_sign && amount > Decimal::ZERO {
        format!("+{:.*}", precision, amount)
    } else {
        format!("{:.*}", precision, amount)
    };
    format!("{:>width$}", value, width = format.width)
}
