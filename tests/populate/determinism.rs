//! Same seed, same bytes.

use crate::{BANK_FIXTURE, CONFIG_FIXTURE, SEED};
use messy_core::DatasetConfig;
use messy_populate::Populator;
use std::path::Path;
use tempfile::TempDir;

const FILES: [&str; 7] = [
    "bank_info.log",
    "earnings.csv",
    "heart_disease.log",
    "customer_order_data.csv",
    "customer_data.csv",
    "item_data.csv",
    "purchase_data.csv",
];

fn populate_all(dir: &Path, seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let config = DatasetConfig::from_file(CONFIG_FIXTURE)?;
    let mut populator = Populator::new(config, seed, dir)?;
    populator.populate_bank_info(Path::new(BANK_FIXTURE))?;
    populator.populate_heart_disease()?;
    populator.populate_orders()?;
    populator.populate_retail()?;
    Ok(())
}

#[test]
fn test_same_seed_same_files() -> Result<(), Box<dyn std::error::Error>> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;
    populate_all(first.path(), SEED)?;
    populate_all(second.path(), SEED)?;

    for name in FILES {
        let a = std::fs::read(first.path().join(name))?;
        let b = std::fs::read(second.path().join(name))?;
        assert!(!a.is_empty(), "{name} is empty");
        assert_eq!(a, b, "{name} differs between runs");
    }
    Ok(())
}

#[test]
fn test_different_seed_different_log() -> Result<(), Box<dyn std::error::Error>> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;
    populate_all(first.path(), SEED)?;
    populate_all(second.path(), SEED + 1)?;

    let a = std::fs::read(first.path().join("heart_disease.log"))?;
    let b = std::fs::read(second.path().join("heart_disease.log"))?;
    assert_ne!(a, b);
    Ok(())
}
