use std::fmt;

/// Errors raised while loading or filtering transfers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Export does not have the expected shape, e.g. a required column is missing
    /// or a direction code is unknown.
    FormatError(String),
    /// A date or amount value could not be parsed.
    ParseError(String),
    IoError(String),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransferError::FormatError(s) => write!(f, "format error: {}", s),
            TransferError::ParseError(s) => write!(f, "parse error: {}", s),
            TransferError::IoError(s) => write!(f, "io error: {}", s),
        }
    }
}

impl std::error::Error for TransferError {}

impl From<std::io::Error> for TransferError {
    fn from(e: std::io::Error) -> Self {
        TransferError::IoError(e.to_string())
    }
}

impl From<csv::Error> for TransferError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(_) => TransferError::IoError(e.to_string()),
            _ => TransferError::FormatError(e.to_string()),
        }
    }
}

/// Simplifies the return signature of everything that loads or filters transfers
pub type Result<T> = std::result::Result<T, TransferError>;
