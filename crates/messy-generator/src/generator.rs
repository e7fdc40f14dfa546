//! Seeded generator tying the individual generators to a configuration.

use crate::generators::bank::corrupt_bank_info;
use crate::generators::heart::generate_heart_row;
use crate::generators::orders::{generate_orders, Order};
use crate::generators::retail::{generate_retail, RetailTables};
use messy_core::{ConfigError, DatasetConfig, Line, Row};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Padding kept colliding with a boolean token
    #[error("Could not obfuscate '{token}' without ambiguity after {attempts} attempts")]
    ObfuscationExhausted { token: String, attempts: u32 },

    /// Input header is too narrow
    #[error("Header has {found} fields, expected at least {expected_at_least}")]
    MalformedHeader {
        expected_at_least: usize,
        found: usize,
    },

    /// Input record does not match the header width
    #[error("Record {record} has {found} fields, expected {expected}")]
    MalformedRow {
        record: usize,
        expected: usize,
        found: usize,
    },

    /// Categorical value missing from its enumeration
    #[error("Record {record}: unknown {field} value {value}")]
    UnknownCategory {
        record: usize,
        field: &'static str,
        value: String,
    },

    /// Sampling from an empty vocabulary
    #[error("Vocabulary '{0}' is empty")]
    EmptyVocabulary(&'static str),

    /// Invalid distribution parameters
    #[error("Distribution error: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}

/// Data generator that produces deterministic messy datasets.
///
/// All datasets draw from one seeded random number generator, so the same
/// seed, configuration and call sequence reproduce the same files.
pub struct MessyGenerator {
    /// Validated dataset configuration
    config: DatasetConfig,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Number of heart disease rows produced so far
    index: u64,
}

impl MessyGenerator {
    /// Create a generator, validating the configuration first.
    pub fn new(config: DatasetConfig, seed: u64) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        })
    }

    /// Get the current heart disease row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Generate the next heart disease log line.
    pub fn next_heart_row(&mut self) -> Result<Line, GeneratorError> {
        let line = generate_heart_row(&mut self.rng, &self.config.heart_disease)?;
        self.index += 1;
        Ok(line)
    }

    /// Lazily generate `count` heart disease lines.
    pub fn heart_rows(&mut self, count: u64) -> HeartRowIterator<'_> {
        HeartRowIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Corrupt a parsed bank file (header plus records).
    pub fn corrupt_bank_info(
        &mut self,
        header: &Row,
        records: &[Row],
    ) -> Result<Vec<Line>, GeneratorError> {
        corrupt_bank_info(&mut self.rng, header, records, &self.config.bank_info)
    }

    /// Generate the orders dataset including duplicated customers.
    pub fn orders(&mut self) -> Result<Vec<Order>, GeneratorError> {
        generate_orders(&mut self.rng, &self.config.orders)
    }

    /// Generate the customer, item and purchase tables.
    pub fn retail(&mut self) -> Result<RetailTables, GeneratorError> {
        generate_retail(&mut self.rng, &self.config.retail)
    }
}

/// Iterator that lazily generates heart disease lines.
pub struct HeartRowIterator<'a> {
    generator: &'a mut MessyGenerator,
    remaining: u64,
}

impl Iterator for HeartRowIterator<'_> {
    type Item = Result<Line, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_heart_row())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HeartRowIterator<'_> {}
