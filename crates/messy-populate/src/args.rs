//! CLI argument definitions shared by every dataset command.

use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by all dataset commands.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Path to dataset config YAML file (defaults are used when omitted)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory the output files are written to
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Dry-run mode: validate configuration without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for corrupting the bank marketing extract.
#[derive(Args, Clone, Debug)]
pub struct BankInfoArgs {
    /// Clean `;`-delimited bank file to corrupt
    #[arg(long, short = 'i', default_value = "bank-full.csv")]
    pub input: PathBuf,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

/// Arguments for the heart disease log.
#[derive(Args, Clone, Debug)]
pub struct HeartDiseaseArgs {
    /// Number of rows to generate (overrides the config file)
    #[arg(long)]
    pub row_count: Option<u64>,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

/// Arguments for the customer orders file.
#[derive(Args, Clone, Debug)]
pub struct OrdersArgs {
    /// Number of initial orders (overrides the config file)
    #[arg(long)]
    pub row_count: Option<u64>,

    /// Number of duplication passes (overrides the config file)
    #[arg(long)]
    pub duplicate_passes: Option<u32>,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

/// Arguments for the customer, item and purchase tables.
#[derive(Args, Clone, Debug)]
pub struct RetailArgs {
    /// Number of customers (overrides the config file)
    #[arg(long)]
    pub customers: Option<u64>,

    /// Number of items (overrides the config file)
    #[arg(long)]
    pub items: Option<u64>,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}
