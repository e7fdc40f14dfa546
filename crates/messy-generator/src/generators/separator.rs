//! Per-row separator selection.

use crate::generator::GeneratorError;
use crate::generators::pick;
use messy_core::{Line, Row};
use rand::Rng;

/// Join a row with a separator chosen independently for this row.
pub fn join_with_random_separator<R: Rng>(
    rng: &mut R,
    row: &Row,
    separators: &[String],
) -> Result<Line, GeneratorError> {
    let separator = pick(rng, separators, "separators")?;
    Ok(Line(row.join(separator)))
}
