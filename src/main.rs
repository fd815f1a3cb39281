use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use regex::Regex;

use swedbank_transfers::{read_transfers_with, Config};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Transfer export CSV file path
    file: String,

    /// Loader and print settings (TOML)
    #[clap(long)]
    config: Option<String>,

    /// Only transfers where money was paid out
    #[clap(long, conflicts_with = "received")]
    paid: bool,

    /// Only transfers where money was received
    #[clap(long)]
    received: bool,

    /// Keep transfers whose reason contains this text
    #[clap(short, long)]
    matching: Vec<String>,

    /// Keep transfers whose reason matches this regular expression
    #[clap(short = 'r', long)]
    regex: Option<String>,

    /// Drop transfers whose reason contains this text
    #[clap(short = 'x', long)]
    excluding: Vec<String>,

    /// Inclusive date range, e.g. --within 2021-05-01 2021-05-31
    #[clap(long, num_args = 2, value_names = ["START", "END"])]
    within: Option<Vec<String>>,

    /// Render as a table instead of plain lines
    #[clap(long)]
    table: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path).with_context(|| format!("Unable to load config {}", path))?,
        None => Config::default(),
    };

    let mut transfers = read_transfers_with(&cli.file, &config)
        .with_context(|| format!("Unable to read transfers from {}", cli.file))?;

    if cli.paid {
        transfers = transfers.paid();
    } else if cli.received {
        transfers = transfers.received();
    }
    for pattern in &cli.matching {
        transfers = transfers.matching(pattern);
    }
    if let Some(regex) = &cli.regex {
        let regex = Regex::new(regex).with_context(|| format!("Invalid regex {}", regex))?;
        transfers = transfers.matching_regex(&regex);
    }
    for pattern in &cli.excluding {
        transfers = transfers.excluding(pattern);
    }
    if let Some(range) = &cli.within {
        transfers = transfers.within_with(&range[0], &range[1], config.date_format.as_deref())?;
    }

    info!("{} transfers selected", transfers.len());
    if cli.table {
        println!("{}", transfers.table(&config.print));
    } else {
        transfers.print(&config.print)?;
    }

    Ok(())
}
