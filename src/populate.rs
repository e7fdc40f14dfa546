//! Dataset command handlers.

use anyhow::Context;
use messy_core::DatasetConfig;
use messy_populate::{
    BankInfoArgs, CommonPopulateArgs, HeartDiseaseArgs, OrdersArgs, PopulateMetrics, Populator,
    RetailArgs,
};

/// Load the config file (or defaults) and validate it.
fn load_config(
    common: &CommonPopulateArgs,
    overrides: impl FnOnce(&mut DatasetConfig),
) -> anyhow::Result<DatasetConfig> {
    let mut config = match &common.config {
        Some(path) => DatasetConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))?,
        None => DatasetConfig::default(),
    };
    overrides(&mut config);
    config
        .validate()
        .with_context(|| "Invalid dataset configuration")?;
    Ok(config)
}

/// Build a populator, or return `None` after logging in dry-run mode.
fn prepare(
    common: &CommonPopulateArgs,
    config: DatasetConfig,
    dataset: &str,
) -> anyhow::Result<Option<Populator>> {
    if common.dry_run {
        tracing::info!(
            "[DRY-RUN] Would write {} dataset to {:?} (seed={})",
            dataset,
            common.output_dir,
            common.seed
        );
        tracing::info!("[DRY-RUN] Configuration validated successfully");
        return Ok(None);
    }

    std::fs::create_dir_all(&common.output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", common.output_dir))?;
    tracing::info!("Writing {} dataset (seed={})", dataset, common.seed);

    let populator = Populator::new(config, common.seed, &common.output_dir)?;
    Ok(Some(populator))
}

fn report(metrics: &[PopulateMetrics]) {
    for m in metrics {
        tracing::info!(
            "Generated {}: {} rows in {:?} ({} bytes)",
            m.output.display(),
            m.rows_written,
            m.total_duration,
            m.file_size_bytes
        );
    }
}

/// Run the bank-info command.
pub fn run_bank_info(args: BankInfoArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common, |_| {})?;
    let Some(mut populator) = prepare(&args.common, config, "bank-info")? else {
        tracing::info!("[DRY-RUN] Input: {:?}", args.input);
        return Ok(());
    };

    let metrics = populator
        .populate_bank_info(&args.input)
        .with_context(|| format!("Failed to corrupt {:?}", args.input))?;
    report(&metrics);
    Ok(())
}

/// Run the heart-disease command.
pub fn run_heart_disease(args: HeartDiseaseArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common, |config| {
        if let Some(rows) = args.row_count {
            config.heart_disease.rows = rows;
        }
    })?;
    let Some(mut populator) = prepare(&args.common, config, "heart-disease")? else {
        return Ok(());
    };

    let metrics = populator
        .populate_heart_disease()
        .context("Failed to generate heart disease log")?;
    report(&[metrics]);
    Ok(())
}

/// Run the orders command.
pub fn run_orders(args: OrdersArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common, |config| {
        if let Some(rows) = args.row_count {
            config.orders.rows = rows;
        }
        if let Some(passes) = args.duplicate_passes {
            config.orders.duplicate_passes = passes;
        }
    })?;
    let Some(mut populator) = prepare(&args.common, config, "orders")? else {
        return Ok(());
    };

    let metrics = populator
        .populate_orders()
        .context("Failed to generate orders")?;
    report(&[metrics]);
    Ok(())
}

/// Run the retail command.
pub fn run_retail(args: RetailArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common, |config| {
        if let Some(customers) = args.customers {
            config.retail.customers = customers;
        }
        if let Some(items) = args.items {
            config.retail.items = items;
        }
    })?;
    let Some(mut populator) = prepare(&args.common, config, "retail")? else {
        return Ok(());
    };

    let metrics = populator
        .populate_retail()
        .context("Failed to generate retail tables")?;
    report(&metrics);
    Ok(())
}
