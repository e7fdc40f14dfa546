//! Command-line interface for messy-data
//!
//! # Usage Examples
//!
//! ## Corrupted datasets
//! ```bash
//! # Corrupt the bank marketing extract (writes bank_info.log and earnings.csv)
//! messy-data bank-info --input bank-full.csv --output-dir out
//!
//! # Medical log with mixed separators and a floating medication column
//! messy-data heart-disease --row-count 50000 --seed 7 --output-dir out
//! ```
//!
//! ## Peer datasets
//! ```bash
//! # Orders with missing prices and repeat customers
//! messy-data orders --row-count 25000 --duplicate-passes 3
//!
//! # Customer, item and purchase tables
//! messy-data retail --customers 1250 --items 150
//! ```
//!
//! ## Configuration
//! Every command accepts `--config dataset.yaml`; sections that are absent keep
//! their defaults. `--dry-run` only validates the configuration. Set
//! `RUST_LOG=messy_populate=debug` for progress output.

use clap::{Parser, Subcommand};
use messy_populate::{BankInfoArgs, HeartDiseaseArgs, OrdersArgs, RetailArgs};

mod populate;

#[derive(Parser)]
#[command(name = "messy-data")]
#[command(about = "Generate deliberately messy tabular datasets for data cleaning exercises")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Corrupt a clean bank marketing extract
    BankInfo {
        #[command(flatten)]
        args: BankInfoArgs,
    },

    /// Generate medical log lines with a randomly placed medication column
    HeartDisease {
        #[command(flatten)]
        args: HeartDiseaseArgs,
    },

    /// Generate customer orders with missing prices and repeat customers
    Orders {
        #[command(flatten)]
        args: OrdersArgs,
    },

    /// Generate customer, item and purchase tables
    Retail {
        #[command(flatten)]
        args: RetailArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BankInfo { args } => populate::run_bank_info(args),
        Commands::HeartDisease { args } => populate::run_heart_disease(args),
        Commands::Orders { args } => populate::run_orders(args),
        Commands::Retail { args } => populate::run_retail(args),
    }
}
