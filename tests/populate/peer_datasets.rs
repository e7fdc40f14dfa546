//! Orders and retail tables.

use crate::{init_tracing, SEED};
use messy_core::DatasetConfig;
use messy_populate::Populator;
use std::collections::HashSet;
use tempfile::TempDir;

#[test]
fn test_orders_only_repeat_existing_customers() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let mut config = DatasetConfig::default();
    config.orders.rows = 200;
    let orders = config.orders.clone();

    let mut populator = Populator::new(config, SEED, temp_dir.path())?;
    let metrics = populator.populate_orders()?;
    assert!(metrics.rows_written >= 200);

    let mut reader = csv::Reader::from_path(temp_dir.path().join(&orders.output))?;
    let mut customers = HashSet::new();
    let mut order_ids = HashSet::new();
    let mut missing_prices = 0;
    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        rows += 1;
        customers.insert(record[0].to_string());
        order_ids.insert(record[4].to_string());
        assert!(orders.continents.iter().any(|c| c == &record[2]));
        if record[3].is_empty() {
            missing_prices += 1;
        }
    }

    assert_eq!(rows, metrics.rows_written);
    assert!(customers.len() <= 200, "duplicates must reuse customer ids");
    assert_eq!(order_ids.len() as u64, rows, "every order gets a fresh id");
    assert!(missing_prices > 0);
    Ok(())
}

#[test]
fn test_retail_purchases_reference_known_rows() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let mut config = DatasetConfig::default();
    config.retail.customers = 30;
    config.retail.items = 12;
    let retail = config.retail.clone();

    let mut populator = Populator::new(config, SEED, temp_dir.path())?;
    let metrics = populator.populate_retail()?;
    assert_eq!(metrics[0].rows_written, 30);
    assert_eq!(metrics[1].rows_written, 12);
    assert!(metrics[2].rows_written >= 30, "every customer buys at least once");

    let column = |file: &str, idx: usize| -> Result<HashSet<String>, csv::Error> {
        let mut reader = csv::Reader::from_path(temp_dir.path().join(file))?;
        reader
            .records()
            .map(|r| r.map(|r| r[idx].to_string()))
            .collect()
    };

    let customers = column(&retail.customer_output, 0)?;
    let items = column(&retail.item_output, 0)?;
    let buyers = column(&retail.purchase_output, 0)?;
    let bought = column(&retail.purchase_output, 2)?;

    assert_eq!(buyers, customers);
    assert!(bought.is_subset(&items));
    Ok(())
}
