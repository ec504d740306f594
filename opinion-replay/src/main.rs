//! Opinion adapter replay CLI.
//!
//! Computes the daily Opinion dimensions from captured `eth_getLogs`
//! responses, exactly as the aggregation host would.
//!
//! # Usage
//!
//! ```bash
//! # Replay one UTC day from a capture file
//! opinion-replay run --date 2026-01-15 --logs captures/2026-01-15.json
//!
//! # Use the files listed in config.toml for chain 56
//! opinion-replay run --date 2026-01-15 --config config.toml
//!
//! # Replay an explicit window given as unix timestamps
//! opinion-replay run --start 1768435200 --end 1768521600 --logs day.json
//!
//! # Select the chain by host slug instead of chain ID
//! opinion-replay run --date 2026-01-15 --chain bsc --logs day.json
//!
//! # Show registration metadata and the wash-trading blacklist
//! opinion-replay methodology
//! opinion-replay blacklist
//! opinion-replay blacklist --check 0xd006482147f77970ef07a91cd84b532433d57400
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use opinion::{Adapter, Chain, OpinionAdapter, TimeWindow, blacklist};
use opinion_replay::config::Config;
use opinion_replay::source::ReplayOptions;

/// Opinion adapter replay over captured logs.
#[derive(Debug, Parser)]
#[command(name = "opinion-replay", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Compute volume, fees and revenue for one window.
    Run {
        /// UTC day to compute (`YYYY-MM-DD`).
        #[arg(long, conflicts_with_all = ["start", "end"], required_unless_present = "start")]
        date: Option<NaiveDate>,

        /// Window start as a unix timestamp (inclusive).
        #[arg(long, requires = "end")]
        start: Option<i64>,

        /// Window end as a unix timestamp (exclusive).
        #[arg(long, requires = "start")]
        end: Option<i64>,

        /// EIP-155 chain ID or host slug (`56` or `bsc`).
        #[arg(long, default_value = "56", value_parser = parse_chain)]
        chain: Chain,

        /// Capture files to read. Overrides the config file when given.
        #[arg(long = "logs")]
        logs: Vec<PathBuf>,

        /// Path to the config file.
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },

    /// Print the adapter registration metadata.
    Methodology,

    /// List the wallets excluded from volume.
    Blacklist {
        /// Only report whether this address is listed.
        #[arg(long)]
        check: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            date,
            start,
            end,
            chain,
            logs,
            config,
        } => {
            let window = resolve_window(date, start, end)?;
            cmd_run(window, chain, &logs, &config).await
        }
        Command::Methodology => cmd_methodology(),
        Command::Blacklist { check } => {
            cmd_blacklist(check.as_deref());
            Ok(())
        }
    }
}

/// Accept either an EIP-155 chain ID or a host slug.
fn parse_chain(value: &str) -> Result<Chain, String> {
    let chain = match value.parse::<u64>() {
        Ok(id) => Chain::from_chain_id(id),
        Err(_) => Chain::from_slug(value),
    };
    chain.ok_or_else(|| format!("no Opinion deployment on chain {value}"))
}

/// Turn the mutually exclusive `--date` / `--start --end` flags into a window.
fn resolve_window(
    date: Option<NaiveDate>,
    start: Option<i64>,
    end: Option<i64>,
) -> Result<TimeWindow> {
    match (date, start, end) {
        (Some(day), None, None) => Ok(TimeWindow::for_day(day)),
        (None, Some(start), Some(end)) => TimeWindow::from_timestamps(start, end)
            .with_context(|| format!("invalid window {start}..{end}")),
        _ => bail!("pass either --date or both --start and --end"),
    }
}

/// Execute the `run` subcommand.
#[allow(clippy::print_stdout)]
async fn cmd_run(
    window: TimeWindow,
    chain: Chain,
    logs_override: &[PathBuf],
    config_path: &Path,
) -> Result<()> {
    let chain_id = chain.chain_id();
    let config = Config::load(config_path)?;
    let files = config.logs_for(chain_id, logs_override);
    if files.is_empty() {
        bail!(
            "no capture files for chain {chain_id}: pass --logs or list them in {}",
            config_path.display()
        );
    }

    let meta = &OpinionAdapter::METADATA;
    if let Some(first_day) = meta.start_date() {
        if window.end.date_naive() <= first_day {
            tracing::warn!(%window, start = meta.start, "window ends before the adapter start date");
        }
    }

    tracing::info!(%chain, %window, files = files.len(), "replaying");

    let options = ReplayOptions::from_files(chain, window, &files)?;
    let result = OpinionAdapter
        .fetch(&options)
        .await
        .with_context(|| format!("fetch failed for {window}"))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Execute the `methodology` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_methodology() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(OpinionAdapter.metadata())?
    );
    Ok(())
}

/// Execute the `blacklist` subcommand.
#[allow(clippy::print_stdout)]
fn cmd_blacklist(check: Option<&str>) {
    if let Some(address) = check {
        let listed = blacklist::is_blacklisted_str(address);
        println!("{address}: {}", if listed { "listed" } else { "not listed" });
        return;
    }
    println!("{} wallets excluded from volume", blacklist::len());
    println!("{}", "-".repeat(44));
    for address in blacklist::iter() {
        println!("{address:#x}");
    }
}
