//! Load a bank transfer export and query it with chained filters.
//!
//! ```no_run
//! use swedbank_transfers::{read_transfers, PrintFormat};
//!
//! let transfers = read_transfers("statement.csv")?;
//! transfers.paid().matching("Grocery").within("2021-05-01", "2021-05-31")?
//!     .print(&PrintFormat::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod common;
pub mod config;
pub mod csv_reader;
pub mod transaction;
pub mod transfers;
pub mod util;

pub use common::TransferError;
pub use config::{Config, PrintFormat};
pub use csv_reader::{read_transfers, read_transfers_with};
pub use transaction::{Transaction, TransferType};
pub use transfers::Transfers;
