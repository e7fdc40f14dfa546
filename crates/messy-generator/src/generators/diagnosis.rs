//! Synthetic diagnosis label.
//!
//! Each risk factor is normalized to a sub-score in [0, 1]. Their mean is the
//! base probability, which is perturbed with Gaussian noise, clamped back into
//! [0, 1] and used as the weight of a coin flip.

use crate::generator::GeneratorError;
use crate::generators::{biased_coin, clamp_unit, normal};
use messy_core::DiagnosisConfig;
use rand::Rng;

/// Measurements that drive the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vitals {
    pub age: i64,
    pub systolic: i64,
    pub diastolic: i64,
    pub cholesterol: i64,
    pub resting_ecg: String,
    pub max_heart_rate: i64,
    pub exercise_induced: String,
    pub medication_count: usize,
}

/// Normalized sub-scores, each within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScores {
    pub age: f64,
    pub systolic: f64,
    pub diastolic: f64,
    pub cholesterol: f64,
    pub resting_ecg: f64,
    pub max_heart_rate: f64,
    pub exercise_induced: f64,
    pub medication: f64,
}

impl RiskScores {
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.age,
            self.systolic,
            self.diastolic,
            self.cholesterol,
            self.resting_ecg,
            self.max_heart_rate,
            self.exercise_induced,
            self.medication,
        ]
    }

    /// Mean of all sub-scores.
    pub fn mean(&self) -> f64 {
        let scores = self.as_array();
        clamp_unit(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

/// Outcome of a diagnosis draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnosis {
    /// Noisy probability actually used for the coin, within [0, 1]
    pub probability: f64,
    pub positive: bool,
}

impl Diagnosis {
    /// `"1"` or `"0"`.
    pub fn label(&self) -> &'static str {
        if self.positive {
            "1"
        } else {
            "0"
        }
    }
}

fn flag(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Compute the normalized sub-scores.
///
/// `vocabulary_size` is the number of known medications.
pub fn risk_scores(vitals: &Vitals, config: &DiagnosisConfig, vocabulary_size: usize) -> RiskScores {
    let age = clamp_unit(vitals.age as f64 / config.age_ceiling);

    // Predicted maximum heart rate shrinks with age; past the base it is
    // meaningless, so any observed rate saturates the ratio.
    let predicted_max = config.max_heart_rate_base - vitals.age;
    let max_heart_rate = if predicted_max <= 0 {
        1.0
    } else {
        clamp_unit(vitals.max_heart_rate as f64 / predicted_max as f64)
    };

    let medication = if vocabulary_size == 0 {
        0.0
    } else {
        clamp_unit(vitals.medication_count as f64 / vocabulary_size as f64)
    };

    RiskScores {
        age,
        systolic: flag(vitals.systolic > config.systolic_threshold),
        diastolic: flag(vitals.diastolic > config.diastolic_threshold),
        cholesterol: flag(vitals.cholesterol > config.cholesterol_threshold),
        resting_ecg: flag(vitals.resting_ecg != config.normal_resting_ecg),
        max_heart_rate,
        exercise_induced: flag(
            config
                .exercise_induced_positive
                .iter()
                .any(|v| *v == vitals.exercise_induced),
        ),
        medication,
    }
}

/// Add noise to a base probability and clamp the result into [0, 1].
pub fn perturb<R: Rng>(rng: &mut R, base: f64, std_dev: f64) -> Result<f64, GeneratorError> {
    Ok(clamp_unit(normal(rng, base, std_dev)?))
}

/// Draw the diagnosis for one patient.
pub fn diagnose<R: Rng>(
    rng: &mut R,
    vitals: &Vitals,
    config: &DiagnosisConfig,
    vocabulary_size: usize,
) -> Result<Diagnosis, GeneratorError> {
    let base = risk_scores(vitals, config, vocabulary_size).mean();
    let probability = perturb(rng, base, config.noise_std_dev)?;
    Ok(Diagnosis {
        probability,
        positive: biased_coin(rng, probability),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vitals() -> Vitals {
        Vitals {
            age: 60,
            systolic: 150,
            diastolic: 90,
            cholesterol: 250,
            resting_ecg: "0".to_string(),
            max_heart_rate: 160,
            exercise_induced: "yes".to_string(),
            medication_count: 2,
        }
    }

    #[test]
    fn test_risk_scores() {
        let scores = risk_scores(&vitals(), &DiagnosisConfig::default(), 5);
        assert!((scores.age - 60.0 / 95.0).abs() < 1e-12);
        assert_eq!(scores.systolic, 1.0);
        assert_eq!(scores.diastolic, 0.0);
        assert_eq!(scores.cholesterol, 1.0);
        assert_eq!(scores.resting_ecg, 0.0);
        assert_eq!(scores.max_heart_rate, 1.0);
        assert_eq!(scores.exercise_induced, 1.0);
        assert!((scores.medication - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_abnormal_ecg_and_negative_exercise() {
        let v = Vitals {
            resting_ecg: "left ventricular hypertrophy".to_string(),
            exercise_induced: "asymptomatic".to_string(),
            ..vitals()
        };
        let scores = risk_scores(&v, &DiagnosisConfig::default(), 5);
        assert_eq!(scores.resting_ecg, 1.0);
        assert_eq!(scores.exercise_induced, 0.0);
    }

    #[test]
    fn test_extreme_inputs_stay_in_unit_interval() {
        let config = DiagnosisConfig::default();
        let extremes = [
            Vitals {
                age: 200,
                systolic: 9999,
                diastolic: 9999,
                cholesterol: 9999,
                max_heart_rate: 9999,
                medication_count: 50,
                ..vitals()
            },
            Vitals {
                age: 220,
                ..vitals()
            },
            Vitals {
                age: -40,
                max_heart_rate: -10,
                ..vitals()
            },
        ];

        let mut rng = StdRng::seed_from_u64(42);
        for v in &extremes {
            let scores = risk_scores(v, &config, 5);
            for s in scores.as_array() {
                assert!((0.0..=1.0).contains(&s), "{scores:?}");
            }
            let base = scores.mean();
            assert!((0.0..=1.0).contains(&base));
            for _ in 0..200 {
                let diagnosis = diagnose(&mut rng, v, &config, 5).unwrap();
                assert!((0.0..=1.0).contains(&diagnosis.probability));
                assert!(diagnosis.label() == "0" || diagnosis.label() == "1");
            }
        }
    }

    #[test]
    fn test_perturb_clamps() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = perturb(&mut rng, 1.0, 10.0).unwrap();
            assert!((0.0..=1.0).contains(&p));
            let p = perturb(&mut rng, 0.0, 10.0).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_certain_outcomes_without_noise() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = DiagnosisConfig {
            noise_std_dev: 0.0,
            ..DiagnosisConfig::default()
        };
        let healthy = Vitals {
            age: 0,
            systolic: 100,
            diastolic: 60,
            cholesterol: 150,
            resting_ecg: "0".to_string(),
            max_heart_rate: 0,
            exercise_induced: "no".to_string(),
            medication_count: 0,
        };
        for _ in 0..100 {
            let diagnosis = diagnose(&mut rng, &healthy, &config, 5).unwrap();
            assert_eq!(diagnosis.probability, 0.0);
            assert_eq!(diagnosis.label(), "0");
        }
    }
}
