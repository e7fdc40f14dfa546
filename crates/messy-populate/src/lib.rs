//! Dataset writers for the messy-data generators.
//!
//! This crate turns generated rows into files: pre-joined messy lines for the
//! corrupted datasets, and clean CSV (via the `csv` crate) for the companion
//! and peer tables. It also defines the CLI arguments shared by every
//! dataset command.
//!
//! # Example
//!
//! ```ignore
//! use messy_core::DatasetConfig;
//! use messy_populate::Populator;
//!
//! let mut populator = Populator::new(DatasetConfig::default(), 42, "out")?;
//! let metrics = populator.populate_heart_disease()?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{BankInfoArgs, CommonPopulateArgs, HeartDiseaseArgs, OrdersArgs, RetailArgs};
pub use error::PopulatorError;
pub use populator::{read_delimited, PopulateMetrics, Populator, DEFAULT_BUFFER_SIZE};
