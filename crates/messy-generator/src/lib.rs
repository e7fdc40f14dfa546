//! Row synthesis and corruption for the messy-data datasets.
//!
//! This crate provides the `MessyGenerator` which produces deliberately dirty
//! teaching datasets. Every generator draws from an explicit seeded RNG so the
//! same seed and configuration always yield the same output.
//!
//! # Architecture
//!
//! ```text
//! DatasetConfig (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  MessyGenerator  │
//! │                  │
//! │  - config        │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ├── heart rows   (medication token, mixed separators, diagnosis)
//!          ├── bank lines   (obfuscated flags, mixed encodings, per-line separator)
//!          ├── orders       (missing prices, repeat customers)
//!          └── retail       (customers, items, purchases)
//! ```
//!
//! # Example
//!
//! ```rust
//! use messy_core::DatasetConfig;
//! use messy_generator::MessyGenerator;
//!
//! let mut generator = MessyGenerator::new(DatasetConfig::default(), 42).unwrap();
//! let line = generator.next_heart_row().unwrap();
//! println!("Generated row: {line}");
//! ```
//!
//! # Generators
//!
//! - `boolean` - yes/no token hidden in random lowercase padding
//! - `categorical` - text or numeric code, chosen per value
//! - `separator` - one separator per serialized row
//! - `medication` - prefix plus a random subset of drug names
//! - `diagnosis` - noisy label derived from normalized risk factors
//! - `heart` - medical log lines
//! - `bank` - corrupted bank marketing extract
//! - `orders` - customer orders with duplicates
//! - `retail` - customer, item and purchase tables

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, HeartRowIterator, MessyGenerator};
pub use generators::orders::Order;
pub use generators::retail::RetailTables;
