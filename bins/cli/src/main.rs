//! Divvy command-line runner.
//!
//! Reads a group snapshot (or a single expense) from a JSON file, runs the
//! engine and prints the result.
//!
//! Usage: divvy settle group.json

mod snapshot;

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use divvy_core::settle_up::{SettleUpService, SettleUpStrategy};
use divvy_core::split::{ExpenseInput, SplitCalculator};
use divvy_shared::AppConfig;
use divvy_shared::config::LogConfig;
use divvy_shared::types::{Currency, Money};

use crate::snapshot::GroupSnapshot;

#[derive(Parser)]
#[command(
    name = "divvy",
    version,
    about = "Split shared expenses and plan who pays whom"
)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Settle up a group snapshot
    Settle {
        /// Path to the group snapshot
        path: PathBuf,

        /// Currency to report in, overriding the snapshot's (e.g. USD)
        #[arg(long)]
        currency: Option<Currency>,
    },
    /// Show the deltas of a single expense
    Split {
        /// Path to the expense
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.log);

    let calculator = SplitCalculator::new(config.settlement.equal_remainder);

    match cli.command {
        Commands::Settle { path, currency } => {
            let snapshot = GroupSnapshot::from_json(&read(&path)?)?;
            let currency = currency
                .or(snapshot.currency)
                .unwrap_or(config.settlement.default_currency);
            let expenses = snapshot.record_expenses(&calculator)?;
            info!(
                group = snapshot.name.as_deref().unwrap_or("unnamed"),
                expenses = expenses.len(),
                "Loaded group snapshot"
            );

            let outcome =
                SettleUpService::settle_up(&expenses, SettleUpStrategy::HeapBased, Utc::now());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else if outcome.is_settled() {
                println!("Everyone is settled up.");
            } else {
                let roster = snapshot.roster();
                for transaction in &outcome.transactions {
                    println!("{}", roster.describe(transaction, currency));
                }
                println!(
                    "Total spent: {} across {} unsettled expense(s)",
                    Money::new(outcome.totals.total_spent, currency),
                    outcome.totals.unsettled_expenses
                );
            }
        }
        Commands::Split { path } => {
            let input: ExpenseInput =
                serde_json::from_str(&read(&path)?).context("Malformed expense")?;
            let deltas = calculator.split_expense(&input)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&deltas)?);
            } else {
                for delta in &deltas {
                    println!("{} {}", delta.user_id, delta.amount);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log.filter.as_str().into());

    // logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(log.json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!log.json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
