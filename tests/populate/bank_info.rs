//! Bank marketing extract corruption.

use crate::{init_tracing, BANK_FIXTURE, SEED};
use messy_core::{split_any, DatasetConfig};
use messy_generator::GeneratorError;
use messy_populate::{read_delimited, Populator, PopulatorError};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_bank_info_corrupts_every_record() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let config = DatasetConfig::default();
    let mut populator = Populator::new(config.clone(), SEED, temp_dir.path())?;

    let metrics = populator.populate_bank_info(Path::new(BANK_FIXTURE))?;
    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[0].rows_written, 16);

    let content = std::fs::read_to_string(temp_dir.path().join(&config.bank_info.output))?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 17, "header plus one line per record");

    let separators = &config.bank_info.row_separators;
    let header = split_any(lines[0], separators);
    assert_eq!(header.len(), 6);
    assert_eq!(header[0], "\"age\"");
    assert_eq!(header[5], "\"hours_per_week\"");

    let (_, clean) = read_delimited(Path::new(BANK_FIXTURE), ';')?;
    for (line, original) in lines[1..].iter().zip(&clean) {
        let tokens = split_any(line, separators);
        assert_eq!(tokens.len(), 6, "line {line:?}");

        // Age and job pass through untouched
        assert_eq!(tokens[0], original.fields()[0]);
        assert_eq!(tokens[1], original.fields()[1]);

        let hours: i64 = tokens[5].parse()?;
        assert!((20..=50).contains(&hours));

        let defaulted = original.fields()[4].contains("yes");
        let token = if defaulted { "yes" } else { "no" };
        let other = if defaulted { "no" } else { "yes" };
        assert_eq!(tokens[4].matches(token).count(), 1, "default {:?}", tokens[4]);
        assert!(!tokens[4].contains(other), "default {:?}", tokens[4]);
    }

    Ok(())
}

#[test]
fn test_bank_info_recodes_to_known_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = DatasetConfig::default();
    let mut populator = Populator::new(config.clone(), SEED, temp_dir.path())?;
    populator.populate_bank_info(Path::new(BANK_FIXTURE))?;

    let content = std::fs::read_to_string(temp_dir.path().join(&config.bank_info.output))?;
    let bank = &config.bank_info;
    for line in content.lines().skip(1) {
        let tokens = split_any(line, &bank.row_separators);
        let marital_ok = bank
            .marital
            .iter()
            .any(|c| tokens[2] == c.code || tokens[2] == format!("\"{}\"", c.label));
        let education_ok = bank
            .education
            .iter()
            .any(|c| tokens[3] == c.code || tokens[3] == format!("\"{}\"", c.label));
        assert!(marital_ok, "marital {:?}", tokens[2]);
        assert!(education_ok, "education {:?}", tokens[3]);
    }

    Ok(())
}

#[test]
fn test_bank_info_rejects_short_record() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("short.csv");
    std::fs::write(
        &input,
        "\"age\";\"job\";\"marital\";\"education\";\"default\";\"balance\"\n\
         30;\"services\";\"single\"\n",
    )?;
    let mut populator = Populator::new(DatasetConfig::default(), SEED, temp_dir.path())?;

    let result = populator.populate_bank_info(&input);
    assert!(
        matches!(
            result,
            Err(PopulatorError::Generator(GeneratorError::MalformedRow {
                record: 1,
                expected: 6,
                found: 3,
            }))
        ),
        "unexpected result: {result:?}"
    );
    Ok(())
}

#[test]
fn test_bank_info_thousand_rows() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("bank-full.csv");
    let maritals = ["single", "married", "divorced"];
    let educations = ["unknown", "primary", "secondary", "tertiary"];
    let mut content =
        String::from("\"age\";\"job\";\"marital\";\"education\";\"default\";\"balance\"\n");
    for i in 0..1000 {
        content.push_str(&format!(
            "{};\"services\";\"{}\";\"{}\";\"{}\";{}\n",
            20 + i % 60,
            maritals[i % maritals.len()],
            educations[i % educations.len()],
            if i % 7 == 0 { "yes" } else { "no" },
            i * 13
        ));
    }
    std::fs::write(&input, content)?;

    let config = DatasetConfig::default();
    let out_dir = temp_dir.path().join("out");
    std::fs::create_dir_all(&out_dir)?;
    let mut populator = Populator::new(config.clone(), SEED, &out_dir)?;
    populator.populate_bank_info(&input)?;

    let output = std::fs::read_to_string(out_dir.join(&config.bank_info.output))?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1001);
    for line in &lines {
        assert_eq!(split_any(line, &config.bank_info.row_separators).len(), 6);
    }
    Ok(())
}
