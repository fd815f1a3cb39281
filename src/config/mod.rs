use std::fs;
use std::path::Path;
use log::{info, warn};
use serde::Deserialize;
use crate::common::{Result, TransferError};

/// Loader and printing settings. Every field has a default matching the Swedbank export,
/// so an empty file (or no file at all) is a valid config.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub columns: Columns,
    pub codes: Codes,
    pub delimiter: char,
    /// chrono format string. When absent the known export date shapes are tried in turn.
    pub date_format: Option<String>,
    pub print: PrintFormat,
}

/// Accepted header names for each canonical column
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Columns {
    pub date: Vec<String>,
    pub reason: Vec<String>,
    pub amount: Vec<String>,
    #[serde(rename = "type")]
    pub transfer_type: Vec<String>,
}

/// Literal direction codes found in the type column
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Codes {
    pub credit: String,
    pub debit: String,
}

/// How `Transfers::print` lays out a line
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PrintFormat {
    /// Width of the right-aligned amount field, sign and decimal point included
    pub width: usize,
    pub precision: u32,
    /// Prefix credits with '+'
    pub plus_sign: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            columns: Columns::default(),
            codes: Codes::default(),
            delimiter: ',',
            date_format: None,
            print: PrintFormat::default(),
        }
    }
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            date: names(&["Data", "Date"]),
            reason: names(&["Paaiškinimai", "Explanation", "Details"]),
            amount: names(&["Suma", "Amount"]),
            transfer_type: names(&["D/K"]),
        }
    }
}

impl Default for Codes {
    fn default() -> Self {
        Codes {
            credit: "K".to_string(),
            debit: "D".to_string(),
        }
    }
}

impl Default for PrintFormat {
    fn default() -> Self {
        PrintFormat {
            width: 7,
            precision: 2,
            plus_sign: false,
        }
    }
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Loads config from a TOML file. A missing file gives the default config.
    pub fn load_from_file(file_path: &str) -> Result<Config> {
        let path = Path::new(file_path);
        if path.exists() && path.is_file() {
            info!("Loading config from {}", path.display());
            let content = fs::read_to_string(path)?;
            Config::from_toml(&content)
        } else {
            warn!("Config file {} not found, using defaults", path.display());
            Ok(Config::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)
            .map_err(|e| TransferError::FormatError(format!("Invalid config: {}", e)))?;
        if config.codes.credit.trim() == config.codes.debit.trim() {
            return Err(TransferError::FormatError(
                format!("Credit and debit codes must differ, both are '{}'", config.codes.credit)));
        }
        Ok(config)
    }
}
