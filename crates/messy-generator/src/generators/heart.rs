//! Medical log rows loosely based on the UCI heart disease dataset.
//!
//! The seven canonical fields always appear in the same order. What varies is
//! the separator before each field and where the medication token lands:
//!
//! ```text
//! 71,138/95BREAK212\t0,164BREAKbidapixaban||benazepril,yes,1
//! ```

use crate::generator::GeneratorError;
use crate::generators::diagnosis::{diagnose, Diagnosis, Vitals};
use crate::generators::medication::{generate_medication_line, MedicationLine};
use crate::generators::{biased_coin, pick, rounded_normal, rounded_uniform};
use messy_core::{HeartDiseaseConfig, Line, Row};
use rand::Rng;

/// Number of canonical fields in a heart disease row.
pub const CANONICAL_FIELDS: usize = 7;

/// One patient before formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartRecord {
    pub vitals: Vitals,
    pub medication: MedicationLine,
    pub diagnosis: Diagnosis,
}

impl HeartRecord {
    /// `"{systolic}/{diastolic}"`
    pub fn blood_pressure(&self) -> String {
        format!("{}/{}", self.vitals.systolic, self.vitals.diastolic)
    }

    /// Canonical fields in output order, without the medication token.
    pub fn canonical_fields(&self) -> Row {
        let v = &self.vitals;
        Row::new(vec![
            v.age.to_string(),
            self.blood_pressure(),
            v.cholesterol.to_string(),
            v.resting_ecg.clone(),
            v.max_heart_rate.to_string(),
            v.exercise_induced.clone(),
            self.diagnosis.label().to_string(),
        ])
    }
}

/// Draw a patient record.
pub fn generate_heart_record<R: Rng>(
    rng: &mut R,
    config: &HeartDiseaseConfig,
) -> Result<HeartRecord, GeneratorError> {
    let age = rounded_normal(rng, config.age_mean, config.age_std_dev)?;
    let systolic = rounded_uniform(rng, config.systolic);
    let diastolic = rounded_uniform(rng, config.diastolic);
    let cholesterol = rounded_uniform(rng, config.cholesterol);
    let resting_ecg = pick(rng, &config.resting_ecg, "heart_disease.resting_ecg")?.to_string();
    let max_heart_rate = rounded_uniform(rng, config.max_heart_rate);
    let exercise_induced =
        pick(rng, &config.exercise_induced, "heart_disease.exercise_induced")?.to_string();
    let medication = generate_medication_line(rng, config)?;

    let vitals = Vitals {
        age,
        systolic,
        diastolic,
        cholesterol,
        resting_ecg,
        max_heart_rate,
        exercise_induced,
        medication_count: medication.count(),
    };
    let diagnosis = diagnose(rng, &vitals, &config.diagnosis, config.medications.len())?;

    Ok(HeartRecord {
        vitals,
        medication,
        diagnosis,
    })
}

/// Serialize a record, placing the medication token at a random position.
///
/// Each field gets a chance to receive the token in front of it (the first
/// field) or right after the previous field. The coin is drawn for every
/// field even once the token is placed. Without a hit the token goes last.
pub fn format_heart_row<R: Rng>(
    rng: &mut R,
    record: &HeartRecord,
    config: &HeartDiseaseConfig,
) -> Result<Line, GeneratorError> {
    let medication = record.medication.render();
    let mut line = String::new();
    let mut inserted = false;

    for (idx, field) in record.canonical_fields().fields().iter().enumerate() {
        if biased_coin(rng, config.insert_probability) && !inserted {
            let separator = pick(rng, &config.separators, "heart_disease.separators")?;
            if idx == 0 {
                line.push_str(&medication);
                line.push_str(separator);
            } else {
                line.push_str(separator);
                line.push_str(&medication);
            }
            inserted = true;
        }
        if idx > 0 {
            line.push_str(pick(rng, &config.separators, "heart_disease.separators")?);
        }
        line.push_str(field);
    }

    if !inserted {
        line.push_str(pick(rng, &config.separators, "heart_disease.separators")?);
        line.push_str(&medication);
    }

    Ok(Line(line))
}

/// Draw and format one heart disease row.
pub fn generate_heart_row<R: Rng>(
    rng: &mut R,
    config: &HeartDiseaseConfig,
) -> Result<Line, GeneratorError> {
    let record = generate_heart_record(rng, config)?;
    format_heart_row(rng, &record, config)
}
