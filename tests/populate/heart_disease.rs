//! Heart disease log generation.

use crate::{init_tracing, SEED};
use messy_core::{split_any, DatasetConfig};
use messy_populate::Populator;
use tempfile::TempDir;

const ROW_COUNT: u64 = 100;

#[test]
fn test_heart_disease_rows_have_eight_tokens() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let mut config = DatasetConfig::default();
    config.heart_disease.rows = ROW_COUNT;
    let heart = config.heart_disease.clone();

    let mut populator = Populator::new(config, SEED, temp_dir.path())?;
    let metrics = populator.populate_heart_disease()?;
    assert_eq!(metrics.rows_written, ROW_COUNT);

    let content = std::fs::read_to_string(temp_dir.path().join(&heart.output))?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len() as u64, ROW_COUNT);

    for line in lines {
        let tokens = split_any(line, &heart.separators);
        assert_eq!(tokens.len(), 8, "line {line:?}");
        assert!(tokens.iter().all(|t| !t.is_empty()), "line {line:?}");

        let (medication, canonical): (Vec<&str>, Vec<&str>) = tokens
            .iter()
            .copied()
            .partition(|t| t.starts_with(heart.medication_prefix.as_str()));
        assert_eq!(medication.len(), 1, "line {line:?}");
        assert_eq!(canonical.len(), 7);

        let names = medication[0]
            .strip_prefix(heart.medication_prefix.as_str())
            .unwrap_or_default()
            .split(heart.medication_joiner.as_str())
            .collect::<Vec<_>>();
        assert!(!names.is_empty() && names.len() <= heart.medications.len());
        assert!(names.iter().all(|n| heart.medications.iter().any(|m| m == n)));

        canonical[0].parse::<i64>()?;
        assert!(canonical[1].contains('/'), "blood pressure {:?}", canonical[1]);
        assert!(canonical[6] == "0" || canonical[6] == "1");
    }

    Ok(())
}
