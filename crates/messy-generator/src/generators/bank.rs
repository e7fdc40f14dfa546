//! Bank marketing extract corruption.
//!
//! Input is the clean `;`-delimited bank file. Only the first six columns
//! survive: the sixth is replaced with synthetic weekly hours, the `default`
//! flag is obfuscated, marital status and education are randomly re-encoded,
//! and every line picks its own separator.

use crate::generator::GeneratorError;
use crate::generators::boolean::obfuscate_bool;
use crate::generators::categorical::recode;
use crate::generators::int_in;
use crate::generators::separator::join_with_random_separator;
use messy_core::{BankInfoConfig, Line, Row};
use rand::Rng;

/// Number of columns in the corrupted output.
pub const BANK_COLUMNS: usize = 6;

const AGE: usize = 0;
const JOB: usize = 1;
const MARITAL: usize = 2;
const EDUCATION: usize = 3;
const DEFAULT: usize = 4;
const HOURS: usize = 5;

/// Keep the first six header fields, renaming the last one.
pub fn corrupt_header<R: Rng>(
    rng: &mut R,
    header: &Row,
    config: &BankInfoConfig,
) -> Result<Line, GeneratorError> {
    if header.len() < BANK_COLUMNS {
        return Err(GeneratorError::MalformedHeader {
            expected_at_least: BANK_COLUMNS,
            found: header.len(),
        });
    }

    let mut columns: Vec<String> = header.fields()[..BANK_COLUMNS].to_vec();
    columns[HOURS] = config.hours_header.clone();
    join_with_random_separator(rng, &Row::new(columns), &config.row_separators)
}

/// Corrupt one data record.
///
/// `record_number` is 1-based and only used for error reporting;
/// `expected_fields` is the header width every record must match.
pub fn corrupt_record<R: Rng>(
    rng: &mut R,
    record: &Row,
    record_number: usize,
    expected_fields: usize,
    config: &BankInfoConfig,
) -> Result<Row, GeneratorError> {
    if record.len() != expected_fields {
        return Err(GeneratorError::MalformedRow {
            record: record_number,
            expected: expected_fields,
            found: record.len(),
        });
    }

    let fields = record.fields();
    let unknown = |field: &'static str, value: &str| GeneratorError::UnknownCategory {
        record: record_number,
        field,
        value: value.to_string(),
    };

    let marital = recode(rng, &fields[MARITAL], &config.marital, config.recode_probability)
        .ok_or_else(|| unknown("marital", &fields[MARITAL]))?;
    let education = recode(
        rng,
        &fields[EDUCATION],
        &config.education,
        config.recode_probability,
    )
    .ok_or_else(|| unknown("education", &fields[EDUCATION]))?;
    let defaulted = fields[DEFAULT].contains(&config.obfuscator.true_token);
    let default = obfuscate_bool(rng, defaulted, &config.obfuscator)?;
    let hours = int_in(rng, config.hours_per_week);

    let mut row = Row::with_capacity(BANK_COLUMNS);
    row.push(fields[AGE].as_str());
    row.push(fields[JOB].as_str());
    row.push(marital);
    row.push(education);
    row.push(default);
    row.push(hours.to_string());
    Ok(row)
}

/// Corrupt a whole file: header line first, then one line per record.
pub fn corrupt_bank_info<R: Rng>(
    rng: &mut R,
    header: &Row,
    records: &[Row],
    config: &BankInfoConfig,
) -> Result<Vec<Line>, GeneratorError> {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(corrupt_header(rng, header, config)?);

    for (idx, record) in records.iter().enumerate() {
        let row = corrupt_record(rng, record, idx + 1, header.len(), config)?;
        lines.push(join_with_random_separator(rng, &row, &config.row_separators)?);
    }

    Ok(lines)
}
