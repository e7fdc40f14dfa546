//! Medication token synthesis.

use crate::generator::GeneratorError;
use messy_core::HeartDiseaseConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Prefix plus a non-repeating, randomly ordered list of drug names.
///
/// Renders as e.g. `bidclopidogrel||apixaban`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationLine {
    prefix: String,
    joiner: String,
    names: Vec<String>,
}

impl MedicationLine {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn render(&self) -> String {
        format!("{}{}", self.prefix, self.names.join(&self.joiner))
    }
}

impl fmt::Display for MedicationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Draw between 1 and `medications.len()` distinct medications.
pub fn generate_medication_line<R: Rng>(
    rng: &mut R,
    config: &HeartDiseaseConfig,
) -> Result<MedicationLine, GeneratorError> {
    if config.medications.is_empty() {
        return Err(GeneratorError::EmptyVocabulary("heart_disease.medications"));
    }

    let count = rng.gen_range(1..=config.medications.len());

    // Shuffle and take first `count` items
    let mut shuffled = config.medications.clone();
    shuffled.shuffle(rng);
    shuffled.truncate(count);

    Ok(MedicationLine {
        prefix: config.medication_prefix.clone(),
        joiner: config.medication_joiner.clone(),
        names: shuffled,
    })
}
