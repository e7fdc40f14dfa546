//! Dataset writers.

use crate::error::PopulatorError;
use csv::{ReaderBuilder, Writer};
use messy_core::{DatasetConfig, Line, Row};
use messy_generator::generators::orders::ORDER_COLUMNS;
use messy_generator::generators::retail::{CUSTOMER_COLUMNS, ITEM_COLUMNS, PURCHASE_COLUMNS};
use messy_generator::MessyGenerator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Column names of the education/wage lookup table.
pub const WAGE_COLUMNS: [&str; 2] = ["education_level", "mean_hourly_wage"];

/// Metrics from writing one output file.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// File that was written.
    pub output: PathBuf,
    /// Number of rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes every dataset into one output directory.
pub struct Populator {
    generator: MessyGenerator,
    output_dir: PathBuf,
}

impl Populator {
    /// Create a populator; the configuration is validated here.
    pub fn new(
        config: DatasetConfig,
        seed: u64,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, PopulatorError> {
        Ok(Self {
            generator: MessyGenerator::new(config, seed)?,
            output_dir: output_dir.into(),
        })
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &DatasetConfig {
        self.generator.config()
    }

    fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Generate the heart disease log.
    pub fn populate_heart_disease(&mut self) -> Result<PopulateMetrics, PopulatorError> {
        let config = &self.generator.config().heart_disease;
        let count = config.rows;
        let output_path = self.output_path(&config.output);
        info!(
            "Generating heart disease log '{}' with {} rows",
            output_path.display(),
            count
        );

        let gen_start = Instant::now();
        let mut lines = Vec::with_capacity(count as usize);
        for line in self.generator.heart_rows(count) {
            lines.push(line?);
            if lines.len() % 10000 == 0 {
                debug!("Generated {} rows", lines.len());
            }
        }
        let generation_duration = gen_start.elapsed();

        let mut metrics = write_lines(&output_path, &lines)?;
        metrics.rows_written = count;
        metrics.generation_duration = generation_duration;
        metrics.total_duration += generation_duration;
        log_complete(&metrics);
        Ok(metrics)
    }

    /// Corrupt the bank file and write the wage lookup table.
    ///
    /// Returns metrics for the corrupted log followed by the lookup table.
    pub fn populate_bank_info(
        &mut self,
        input: &Path,
    ) -> Result<Vec<PopulateMetrics>, PopulatorError> {
        let config = self.generator.config().bank_info.clone();
        let output_path = self.output_path(&config.output);
        info!(
            "Corrupting bank file '{}' into '{}'",
            input.display(),
            output_path.display()
        );

        let gen_start = Instant::now();
        let (header, records) = read_delimited(input, config.input_delimiter)?;
        let lines = self.generator.corrupt_bank_info(&header, &records)?;
        let generation_duration = gen_start.elapsed();

        let mut metrics = write_lines(&output_path, &lines)?;
        metrics.rows_written = records.len() as u64;
        metrics.generation_duration = generation_duration;
        metrics.total_duration += generation_duration;
        log_complete(&metrics);

        let wage_records: Vec<Vec<String>> = config
            .mean_wages
            .iter()
            .map(|w| vec![w.education_level.clone(), w.mean_hourly_wage.to_string()])
            .collect();
        let wage_metrics = write_csv(
            &self.output_path(&config.wage_output),
            &WAGE_COLUMNS,
            &wage_records,
        )?;
        log_complete(&wage_metrics);

        Ok(vec![metrics, wage_metrics])
    }

    /// Generate the customer orders file.
    pub fn populate_orders(&mut self) -> Result<PopulateMetrics, PopulatorError> {
        let output_path = self.output_path(&self.generator.config().orders.output);
        info!(
            "Generating orders '{}' from {} initial orders",
            output_path.display(),
            self.generator.config().orders.rows
        );

        let gen_start = Instant::now();
        let orders = self.generator.orders()?;
        let records: Vec<Vec<String>> = orders.iter().map(|o| o.to_record()).collect();
        let generation_duration = gen_start.elapsed();

        let mut metrics = write_csv(&output_path, &ORDER_COLUMNS, &records)?;
        metrics.generation_duration = generation_duration;
        metrics.total_duration += generation_duration;
        log_complete(&metrics);
        Ok(metrics)
    }

    /// Generate the customer, item and purchase tables.
    pub fn populate_retail(&mut self) -> Result<Vec<PopulateMetrics>, PopulatorError> {
        let config = self.generator.config().retail.clone();
        info!(
            "Generating retail tables with {} customers and {} items",
            config.customers, config.items
        );

        let gen_start = Instant::now();
        let tables = self.generator.retail()?;
        let generation_duration = gen_start.elapsed();
        debug!(
            "Generated {} purchases in {:?}",
            tables.purchases.len(),
            generation_duration
        );

        let customers: Vec<Vec<String>> =
            tables.customers.iter().map(|c| c.to_record()).collect();
        let items: Vec<Vec<String>> = tables.items.iter().map(|i| i.to_record()).collect();
        let purchases: Vec<Vec<String>> =
            tables.purchases.iter().map(|p| p.to_record()).collect();

        let mut all = Vec::with_capacity(3);
        for (file_name, header, records) in [
            (&config.customer_output, &CUSTOMER_COLUMNS[..], &customers),
            (&config.item_output, &ITEM_COLUMNS[..], &items),
            (&config.purchase_output, &PURCHASE_COLUMNS[..], &purchases),
        ] {
            let metrics = write_csv(&self.output_path(file_name), header, records)?;
            log_complete(&metrics);
            all.push(metrics);
        }
        Ok(all)
    }
}

/// Read a delimited file as raw fields, keeping any quotes as written.
///
/// Returns the header followed by the data records. Records may have any
/// width; checking it against the header is left to the caller.
pub fn read_delimited(path: &Path, delimiter: char) -> Result<(Row, Vec<Row>), PopulatorError> {
    let delimiter = u8::try_from(delimiter).map_err(|_| PopulatorError::InvalidDelimiter(delimiter))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(Row::new(record.iter().map(str::to_string).collect()));
    }

    if rows.is_empty() {
        return Err(PopulatorError::EmptyInput(path.display().to_string()));
    }
    let header = rows.remove(0);
    Ok((header, rows))
}

/// Write pre-formatted lines, one per row.
fn write_lines(path: &Path, lines: &[Line]) -> Result<PopulateMetrics, PopulatorError> {
    let write_start = Instant::now();
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    drop(writer);

    let write_duration = write_start.elapsed();
    Ok(PopulateMetrics {
        output: path.to_path_buf(),
        rows_written: lines.len() as u64,
        total_duration: write_duration,
        generation_duration: Duration::ZERO,
        write_duration,
        file_size_bytes: std::fs::metadata(path)?.len(),
    })
}

/// Write a clean comma-separated table with a header row.
fn write_csv(
    path: &Path,
    header: &[&str],
    records: &[Vec<String>],
) -> Result<PopulateMetrics, PopulatorError> {
    let write_start = Instant::now();
    let file = File::create(path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    writer.write_record(header)?;
    for (idx, record) in records.iter().enumerate() {
        writer.write_record(record)?;
        if (idx + 1) % 10000 == 0 {
            debug!("Written {} rows", idx + 1);
        }
    }

    writer.flush()?;
    drop(writer);

    let write_duration = write_start.elapsed();
    Ok(PopulateMetrics {
        output: path.to_path_buf(),
        rows_written: records.len() as u64,
        total_duration: write_duration,
        generation_duration: Duration::ZERO,
        write_duration,
        file_size_bytes: std::fs::metadata(path)?.len(),
    })
}

fn log_complete(metrics: &PopulateMetrics) {
    info!(
        "Wrote '{}': {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        metrics.output.display(),
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.rows_per_second()
    );
}
