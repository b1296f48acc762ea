#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod parse;
mod report;
mod scan;

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{
    config::Config,
    error::Error,
    fetch::{make_client, MenuPage},
};

pub use error::Result;

#[derive(Debug, Parser)]
#[command(name = "uw_menu")]
#[command(about = "Find when and where a dish is served at UW Food Services.")]
struct Cli {
    /// Menu item keyword to search for
    #[arg(short, long, default_value = "steak")]
    keyword: String,

    /// Number of days to search ahead
    #[arg(short, long, default_value_t = 14)]
    days: u32,

    /// Start date in YYYY-MM-DD format (default: today)
    #[arg(short, long, value_parser = parse_date)]
    start: Option<NaiveDate>,

    /// Print the matches as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, scan::DATE_KEY_FORMAT).map_err(|_| Error::InvalidDate(s.to_owned()))
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let start = cli.start.unwrap_or_else(|| Local::now().date_naive());
    let source = MenuPage::new(make_client(config.timeout)?, config.menu_url);
    log::info!(
        "scanning {} day(s) from {start} for {:?}",
        cli.days,
        cli.keyword
    );

    // progress goes to stderr when stdout carries JSON
    let json = cli.json;
    if !json {
        println!("{}", report::header(&cli.keyword, cli.days, start));
    }
    let results = scan::search(&source, &cli.keyword, cli.days, start, |outcome| {
        let line = report::progress_line(outcome);
        if json {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    })
    .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!();
        print!("{}", report::render(&cli.keyword, cli.days, &results));
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
