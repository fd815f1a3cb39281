use comfy_table::{Cell, CellAlignment, Color, Table, TableComponent};
use crate::config::PrintFormat;
use crate::transfers::{format_amount, Transfers};

impl Transfers {
    /// Render transfers as a bordered table, debits in red and credits in green.
    pub fn table(&self, format: &PrintFormat) -> Table {
        let mut table = Table::new();
        table.remove_style(TableComponent::HorizontalLines);
        table.remove_style(TableComponent::MiddleIntersections);
        table.remove_style(TableComponent::LeftBorderIntersections);
        table.remove_style(TableComponent::RightBorderIntersections);
        table.set_header(vec!["Date", "Amount", "Type", "Reason"]);

        for t in self.iter() {
            let color = if t.is_debit() { Color::Red } else { Color::Green };
            table.add_row(vec![
                Cell::new(t.date.format("%Y-%m-%d").to_string()),
                Cell::new(format_amount(t.amount, format).trim()).fg(color).set_alignment(CellAlignment::Right),
                Cell::new(t.transfer_type.to_string()),
                Cell::new(t.reason.as_str()),
            ]);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use crate::transaction::{Transaction, TransferType};
    use super::*;

    #[test]
    fn test_table_rows() {
        let transfers = Transfers::new(vec![
            Transaction::new(NaiveDate::from_ymd_opt(2021, 5, 3).unwrap(), "Grocery", Decimal::from_str("15.50").unwrap(), TransferType::Debit),
            Transaction::new(NaiveDate::from_ymd_opt(2021, 5, 4).unwrap(), "Salary", Decimal::from(1200), TransferType::Credit),
        ]);

        let rendered = transfers.table(&PrintFormat::default()).to_string();
        assert_eq!(rendered.lines().filter(|line| line.contains("2021-05-0")).count(), 2);
        assert!(rendered.contains("Reason"));
        assert!(rendered.contains("-15.50"));
        assert!(rendered.contains("1200.00"));
        assert!(rendered.contains("debit"));
    }
}
