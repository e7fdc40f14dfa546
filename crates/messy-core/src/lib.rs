//! Core types for the messy-data generators.
//!
//! This crate provides the configuration and row types shared by the
//! generator and writer crates:
//!
//! - [`DatasetConfig`] - Per-dataset settings loaded from YAML
//! - [`Row`] - Positional row of formatted field values
//! - [`split_any`] - Tokenizer for lines with mixed separators
//!
//! ```text
//! messy-core (this crate)
//!    │
//!    ├─── messy-generator  (seeded row synthesis and corruption)
//!    │
//!    └─── messy-populate   (file writers and CLI arguments)
//! ```

pub mod schema;
pub mod values;

// Re-exports for convenience
pub use schema::{
    BankInfoConfig, Category, ConfigError, DatasetConfig, DiagnosisConfig, FloatRange,
    HeartDiseaseConfig, IntRange, Location, ObfuscatorConfig, OrdersConfig, PurchaseWeights,
    RetailConfig, WageEntry,
};
pub use values::{split_any, Line, Row};
