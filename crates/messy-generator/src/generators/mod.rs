//! Individual generators for each dataset and corruption step.
//!
//! Every function takes the random source explicitly. Given the same seeded
//! RNG and the same configuration, the calls below always draw in the same
//! order and therefore produce the same output.

pub mod bank;
pub mod boolean;
pub mod categorical;
pub mod diagnosis;
pub mod heart;
pub mod medication;
pub mod orders;
pub mod retail;
pub mod separator;
pub mod uuid;

use crate::generator::GeneratorError;
use messy_core::{FloatRange, IntRange};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Bernoulli trial with success probability `p`.
pub fn biased_coin<R: Rng>(rng: &mut R, p: f64) -> bool {
    rng.gen_bool(clamp_unit(p))
}

/// Clamp into [0, 1]; NaN maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Pick one value from a vocabulary.
pub fn pick<'a, R: Rng>(
    rng: &mut R,
    values: &'a [String],
    vocabulary: &'static str,
) -> Result<&'a str, GeneratorError> {
    if values.is_empty() {
        return Err(GeneratorError::EmptyVocabulary(vocabulary));
    }
    Ok(&values[rng.gen_range(0..values.len())])
}

/// Uniform integer in an inclusive range.
pub fn int_in<R: Rng>(rng: &mut R, range: IntRange) -> i64 {
    rng.gen_range(range.min..=range.max)
}

/// Uniform float in an inclusive range, rounded to the nearest integer.
pub fn rounded_uniform<R: Rng>(rng: &mut R, range: FloatRange) -> i64 {
    rng.gen_range(range.min..=range.max).round() as i64
}

/// Normal draw rounded to the nearest integer.
pub fn rounded_normal<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> Result<i64, GeneratorError> {
    Ok(normal(rng, mean, std_dev)?.round() as i64)
}

/// Single normal draw.
pub fn normal<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> Result<f64, GeneratorError> {
    let dist = Normal::new(mean, std_dev)?;
    Ok(dist.sample(rng))
}
