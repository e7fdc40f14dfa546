//! Configuration loading and validation.

use crate::{CONFIG_FIXTURE, SEED};
use messy_core::{ConfigError, DatasetConfig};
use messy_generator::GeneratorError;
use messy_populate::{Populator, PopulatorError};
use tempfile::TempDir;

#[test]
fn test_fixture_overrides_sizes_only() -> Result<(), Box<dyn std::error::Error>> {
    let config = DatasetConfig::from_file(CONFIG_FIXTURE)?;
    config.validate()?;

    assert_eq!(config.heart_disease.rows, 200);
    assert_eq!(config.orders.rows, 120);
    assert_eq!(config.orders.duplicate_passes, 2);
    assert_eq!(config.retail.customers, 40);
    assert_eq!(config.retail.items, 15);

    let defaults = DatasetConfig::default();
    assert_eq!(config.bank_info, defaults.bank_info);
    assert_eq!(config.heart_disease.separators, defaults.heart_disease.separators);
    Ok(())
}

#[test]
fn test_empty_vocabulary_is_rejected() {
    let config = DatasetConfig::from_yaml("heart_disease:\n  medications: []\n").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyVocabulary("heart_disease.medications"))
    ));

    let temp_dir = TempDir::new().unwrap();
    let result = Populator::new(config, SEED, temp_dir.path());
    assert!(matches!(
        result,
        Err(PopulatorError::Generator(GeneratorError::Config(
            ConfigError::EmptyVocabulary(_)
        )))
    ));
}

#[test]
fn test_invalid_probability_is_rejected() {
    let config = DatasetConfig::from_yaml("bank_info:\n  recode_probability: 1.5\n").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidProbability { .. })
    ));
}

#[test]
fn test_missing_config_file() {
    assert!(matches!(
        DatasetConfig::from_file("tests/fixtures/does_not_exist.yaml"),
        Err(ConfigError::IoError(_))
    ));
}
