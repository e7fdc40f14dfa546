//! Dataset population integration tests.
//!
//! Each test writes one dataset into a temporary directory with a fixed seed
//! and checks the structural properties of the files on disk.

mod bank_info;
mod config;
mod determinism;
mod heart_disease;
mod peer_datasets;

pub const SEED: u64 = 42;
pub const BANK_FIXTURE: &str = "tests/fixtures/bank_sample.csv";
pub const CONFIG_FIXTURE: &str = "tests/fixtures/dataset_config.yaml";

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("messy_populate=debug")
        .try_init()
        .ok();
}
