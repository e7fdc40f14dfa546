//! Dataset configuration for the messy-data generators.
//!
//! A single YAML document configures every dataset. Each section is optional
//! and falls back to the canonical teaching datasets, so an empty document
//! (or no file at all) reproduces the default output.
//!
//! ```yaml
//! heart_disease:
//!   rows: 1000
//!   medications: [apixaban, clopidogrel]
//! bank_info:
//!   recode_probability: 0.25
//! ```
//!
//! Configuration is validated up front with [`DatasetConfig::validate`] so that
//! empty vocabularies and out-of-range probabilities fail before any row is
//! generated.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A vocabulary the generators sample from is empty
    #[error("Vocabulary '{0}' must not be empty")]
    EmptyVocabulary(&'static str),

    /// A probability outside [0, 1]
    #[error("Probability '{field}' must be within [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    /// A range whose minimum exceeds its maximum
    #[error("Range '{field}' is inverted: min {min} > max {max}")]
    InvalidRange {
        field: &'static str,
        min: String,
        max: String,
    },

    /// Any other rejected value
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

// ============================================================================
// Shared Building Blocks
// ============================================================================

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntRange {
    /// Minimum value (inclusive)
    pub min: i64,
    /// Maximum value (inclusive)
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                field,
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        Ok(())
    }
}

/// Inclusive floating point range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FloatRange {
    /// Minimum value (inclusive)
    pub min: f64,
    /// Maximum value (inclusive)
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                field,
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        Ok(())
    }
}

/// A categorical label together with its numeric code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Text form as it appears in the input (without quotes)
    pub label: String,
    /// Numeric code substituted when the field is re-encoded
    pub code: String,
}

impl Category {
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { field, value });
    }
    Ok(())
}

fn check_non_empty<T>(field: &'static str, values: &[T]) -> Result<(), ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::EmptyVocabulary(field));
    }
    Ok(())
}

fn check_std_dev(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("standard deviation must be finite and non-negative, got {value}"),
        });
    }
    Ok(())
}

fn check_separators(field: &'static str, separators: &[String]) -> Result<(), ConfigError> {
    check_non_empty(field, separators)?;
    if separators.iter().any(|s| s.is_empty()) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "separators must not be empty strings".to_string(),
        });
    }
    Ok(())
}

/// Reject separators that could also match inside generated field content.
///
/// `forbidden` flags characters the generator may emit on its own (padding
/// letters, digits); `values` are the configured strings written verbatim.
fn check_separators_disjoint(
    field: &'static str,
    separators: &[String],
    forbidden: fn(char) -> bool,
    values: &[&str],
) -> Result<(), ConfigError> {
    for separator in separators {
        if let Some(c) = separator.chars().find(|&c| forbidden(c)) {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("separator {separator:?} contains {c:?}, which can appear inside a field"),
            });
        }
        if let Some(value) = values.iter().find(|v| v.contains(separator.as_str())) {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("separator {separator:?} occurs inside {value:?}"),
            });
        }
    }
    Ok(())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Boolean Obfuscation
// ============================================================================

/// Settings for hiding a yes/no token inside random lowercase padding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObfuscatorConfig {
    /// Token emitted for `true`
    pub true_token: String,
    /// Token emitted for `false`
    pub false_token: String,
    /// Padding length on each side of the token (inclusive)
    pub padding: IntRange,
    /// Attempts before giving up on padding that collides with a token
    pub max_attempts: u32,
}

impl Default for ObfuscatorConfig {
    fn default() -> Self {
        Self {
            true_token: "yes".to_string(),
            false_token: "no".to_string(),
            padding: IntRange::new(2, 4),
            max_attempts: 64,
        }
    }
}

impl ObfuscatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.true_token.is_empty() || self.false_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "obfuscator.tokens",
                reason: "tokens must not be empty".to_string(),
            });
        }
        // One token inside the other makes an unambiguous output impossible.
        if self.true_token.contains(&self.false_token) || self.false_token.contains(&self.true_token)
        {
            return Err(ConfigError::InvalidValue {
                field: "obfuscator.tokens",
                reason: format!(
                    "'{}' and '{}' must not contain each other",
                    self.true_token, self.false_token
                ),
            });
        }
        self.padding.validate("obfuscator.padding")?;
        if self.padding.min < 0 {
            return Err(ConfigError::InvalidValue {
                field: "obfuscator.padding",
                reason: "padding length must not be negative".to_string(),
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "obfuscator.max_attempts",
                reason: "at least one attempt is required".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Bank Info
// ============================================================================

/// Education level with the mean wage written to the companion lookup table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WageEntry {
    pub education_level: String,
    pub mean_hourly_wage: f64,
}

/// Settings for corrupting the bank marketing extract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BankInfoConfig {
    /// Delimiter of the clean input file
    pub input_delimiter: char,
    /// Join strings chosen per output line
    pub row_separators: Vec<String>,
    /// Marital status enumeration
    pub marital: Vec<Category>,
    /// Education level enumeration
    pub education: Vec<Category>,
    /// Chance that a categorical field is replaced by its code
    pub recode_probability: f64,
    /// Header name written in place of the sixth input column
    pub hours_header: String,
    /// Synthetic weekly hours (inclusive)
    pub hours_per_week: IntRange,
    pub obfuscator: ObfuscatorConfig,
    /// Rows of the companion education/wage table
    pub mean_wages: Vec<WageEntry>,
    /// Output file name for the corrupted rows
    pub output: String,
    /// Output file name for the wage lookup table
    pub wage_output: String,
}

impl Default for BankInfoConfig {
    fn default() -> Self {
        Self {
            input_delimiter: ';',
            row_separators: strings(&[";", ","]),
            marital: vec![
                Category::new("single", "0"),
                Category::new("married", "1"),
                Category::new("divorced", "2"),
            ],
            education: vec![
                Category::new("unknown", "99"),
                Category::new("primary", "1"),
                Category::new("secondary", "2"),
                Category::new("tertiary", "3"),
            ],
            recode_probability: 0.5,
            hours_header: "\"hours_per_week\"".to_string(),
            hours_per_week: IntRange::new(20, 50),
            obfuscator: ObfuscatorConfig::default(),
            mean_wages: vec![
                WageEntry {
                    education_level: "unknown".to_string(),
                    mean_hourly_wage: 25.42,
                },
                WageEntry {
                    education_level: "primary".to_string(),
                    mean_hourly_wage: 29.86,
                },
                WageEntry {
                    education_level: "secondary".to_string(),
                    mean_hourly_wage: 30.17,
                },
                WageEntry {
                    education_level: "tertiary".to_string(),
                    mean_hourly_wage: 33.91,
                },
            ],
            output: "bank_info.log".to_string(),
            wage_output: "earnings.csv".to_string(),
        }
    }
}

impl BankInfoConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_separators("bank_info.row_separators", &self.row_separators)?;
        check_non_empty("bank_info.marital", &self.marital)?;
        check_non_empty("bank_info.education", &self.education)?;
        check_non_empty("bank_info.mean_wages", &self.mean_wages)?;
        check_probability("bank_info.recode_probability", self.recode_probability)?;
        self.hours_per_week.validate("bank_info.hours_per_week")?;
        self.obfuscator.validate()?;

        // Padding is lowercase, ages and codes are digits, labels may be quoted.
        let mut values = vec![
            self.obfuscator.true_token.as_str(),
            self.obfuscator.false_token.as_str(),
        ];
        for category in self.marital.iter().chain(&self.education) {
            values.push(&category.label);
            values.push(&category.code);
        }
        check_separators_disjoint(
            "bank_info.row_separators",
            &self.row_separators,
            |c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '"',
            &values,
        )?;
        Ok(())
    }
}

// ============================================================================
// Heart Disease
// ============================================================================

/// Thresholds feeding the synthetic diagnosis label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiagnosisConfig {
    /// Age at which the age sub-score saturates
    pub age_ceiling: f64,
    pub systolic_threshold: i64,
    pub diastolic_threshold: i64,
    pub cholesterol_threshold: i64,
    /// Predicted maximum heart rate is `max_heart_rate_base - age`
    pub max_heart_rate_base: i64,
    /// Resting ECG value considered normal; anything else is abnormal and
    /// raises the risk score (flagging the normal value instead is not supported)
    pub normal_resting_ecg: String,
    /// Exercise-induced values that count as positive
    pub exercise_induced_positive: Vec<String>,
    /// Standard deviation of the noise added to the probability
    pub noise_std_dev: f64,
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self {
            age_ceiling: 95.0,
            systolic_threshold: 140,
            diastolic_threshold: 100,
            cholesterol_threshold: 240,
            max_heart_rate_base: 220,
            normal_resting_ecg: "0".to_string(),
            exercise_induced_positive: strings(&["1", "yes", "symptomatic"]),
            noise_std_dev: 0.10,
        }
    }
}

/// Settings for the medical log generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeartDiseaseConfig {
    /// Number of rows to generate
    pub rows: u64,
    /// Separators between fields (and around the medication token)
    pub separators: Vec<String>,
    /// Marker written before the medication list
    pub medication_prefix: String,
    /// Delimiter between medication names
    pub medication_joiner: String,
    /// Drug vocabulary
    pub medications: Vec<String>,
    /// Per-field chance of inserting the medication token next to it
    pub insert_probability: f64,
    pub age_mean: f64,
    pub age_std_dev: f64,
    pub systolic: FloatRange,
    pub diastolic: FloatRange,
    /// mg/dL
    pub cholesterol: FloatRange,
    pub max_heart_rate: FloatRange,
    pub resting_ecg: Vec<String>,
    pub exercise_induced: Vec<String>,
    pub diagnosis: DiagnosisConfig,
    /// Output file name
    pub output: String,
}

impl Default for HeartDiseaseConfig {
    fn default() -> Self {
        Self {
            rows: 50_000,
            separators: strings(&[",", "BREAK", "\t"]),
            medication_prefix: "bid".to_string(),
            medication_joiner: "||".to_string(),
            medications: strings(&[
                "apixaban",
                "dabigatran",
                "clopidogrel",
                "dipyridamole",
                "benazepril",
            ]),
            insert_probability: 0.2,
            age_mean: 65.0,
            age_std_dev: 12.0,
            systolic: FloatRange::new(100.0, 160.0),
            diastolic: FloatRange::new(60.0, 110.0),
            cholesterol: FloatRange::new(150.0, 300.0),
            max_heart_rate: FloatRange::new(100.0, 200.0),
            resting_ecg: strings(&["0", "ST-T wave abnormality", "left ventricular hypertrophy"]),
            exercise_induced: strings(&["0", "1", "yes", "no", "symptomatic", "asymptomatic"]),
            diagnosis: DiagnosisConfig::default(),
            output: "heart_disease.log".to_string(),
        }
    }
}

impl HeartDiseaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_separators("heart_disease.separators", &self.separators)?;
        check_non_empty("heart_disease.medications", &self.medications)?;
        if self.medication_joiner.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "heart_disease.medication_joiner",
                reason: "joiner must not be empty".to_string(),
            });
        }
        if self.medications.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "heart_disease.medications",
                reason: "medication names must not be empty".to_string(),
            });
        }
        check_non_empty("heart_disease.resting_ecg", &self.resting_ecg)?;
        check_non_empty("heart_disease.exercise_induced", &self.exercise_induced)?;
        check_probability("heart_disease.insert_probability", self.insert_probability)?;
        check_std_dev("heart_disease.age_std_dev", self.age_std_dev)?;
        check_std_dev("heart_disease.diagnosis.noise_std_dev", self.diagnosis.noise_std_dev)?;
        self.systolic.validate("heart_disease.systolic")?;
        self.diastolic.validate("heart_disease.diastolic")?;
        self.cholesterol.validate("heart_disease.cholesterol")?;
        self.max_heart_rate.validate("heart_disease.max_heart_rate")?;
        if self.diagnosis.age_ceiling <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "heart_disease.diagnosis.age_ceiling",
                reason: "must be positive".to_string(),
            });
        }

        // Numeric fields use digits, '-' for negatives and '/' in blood pressure.
        let mut values = vec![
            self.medication_prefix.as_str(),
            self.medication_joiner.as_str(),
        ];
        values.extend(
            self.medications
                .iter()
                .chain(&self.resting_ecg)
                .chain(&self.exercise_induced)
                .map(String::as_str),
        );
        check_separators_disjoint(
            "heart_disease.separators",
            &self.separators,
            |c| c.is_ascii_digit() || c == '-' || c == '/',
            &values,
        )?;
        Ok(())
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Settings for the customer order dataset with duplicated customers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrdersConfig {
    /// Number of initial orders (before duplication)
    pub rows: u64,
    pub age: IntRange,
    pub continents: Vec<String>,
    pub price: FloatRange,
    /// Chance that any price is missing
    pub missing_probability: f64,
    /// Continent whose prices go missing more often
    pub biased_continent: String,
    /// Additional missing chance for the biased continent
    pub biased_missing_probability: f64,
    /// Chance that a customer places another order in a duplication pass
    pub duplicate_probability: f64,
    /// Number of duplication passes
    pub duplicate_passes: u32,
    pub output: String,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            rows: 25_000,
            age: IntRange::new(18, 84),
            continents: strings(&[
                "North America",
                "South America",
                "Europe",
                "Asia",
                "Africa",
                "Australia",
            ]),
            price: FloatRange::new(49.99, 499.99),
            missing_probability: 0.07,
            biased_continent: "North America".to_string(),
            biased_missing_probability: 0.3,
            duplicate_probability: 0.2,
            duplicate_passes: 3,
            output: "customer_order_data.csv".to_string(),
        }
    }
}

impl OrdersConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_empty("orders.continents", &self.continents)?;
        self.age.validate("orders.age")?;
        self.price.validate("orders.price")?;
        check_probability("orders.missing_probability", self.missing_probability)?;
        check_probability(
            "orders.biased_missing_probability",
            self.biased_missing_probability,
        )?;
        check_probability("orders.duplicate_probability", self.duplicate_probability)?;
        Ok(())
    }
}

// ============================================================================
// Retail
// ============================================================================

/// Store region and its contribution to purchase frequency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    pub effect: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, effect: f64) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }
}

/// Linear weights of the purchase-frequency factor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PurchaseWeights {
    pub days_since_joined: f64,
    pub satisfaction: f64,
    pub membership: f64,
    pub email_subscription: f64,
    pub location: f64,
    /// Standard deviation of the noise added to the factor
    pub noise_std_dev: f64,
}

impl Default for PurchaseWeights {
    fn default() -> Self {
        Self {
            days_since_joined: 0.008,
            satisfaction: 0.004,
            membership: 0.05,
            email_subscription: 0.05,
            location: 0.0005,
            noise_std_dev: 0.1,
        }
    }
}

/// Settings for the customer, item and purchase tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetailConfig {
    pub customers: u64,
    pub items: u64,
    pub locations: Vec<Location>,
    pub days_since_joined: IntRange,
    pub membership_level: IntRange,
    pub satisfaction_score: IntRange,
    pub articles: Vec<String>,
    pub colours: Vec<String>,
    /// Upper bound on purchases per customer
    pub max_purchases: u32,
    pub weights: PurchaseWeights,
    pub customer_output: String,
    pub item_output: String,
    pub purchase_output: String,
}

impl Default for RetailConfig {
    fn default() -> Self {
        Self {
            customers: 1250,
            items: 150,
            locations: vec![
                Location::new("AMERICAS", 75.0),
                Location::new("EUROPE", 50.0),
                Location::new("ASIA", 100.0),
                Location::new("AFRICA", 25.0),
            ],
            days_since_joined: IntRange::new(1, 50),
            membership_level: IntRange::new(0, 3),
            satisfaction_score: IntRange::new(1, 100),
            articles: strings(&["pants", "shirt", "jacket", "skirt", "bag"]),
            colours: strings(&["BLUE", "GREEN", "RED", "PINK", "WHITE", "BLACK"]),
            max_purchases: 15,
            weights: PurchaseWeights::default(),
            customer_output: "customer_data.csv".to_string(),
            item_output: "item_data.csv".to_string(),
            purchase_output: "purchase_data.csv".to_string(),
        }
    }
}

impl RetailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_empty("retail.locations", &self.locations)?;
        check_non_empty("retail.articles", &self.articles)?;
        check_non_empty("retail.colours", &self.colours)?;
        self.days_since_joined.validate("retail.days_since_joined")?;
        self.membership_level.validate("retail.membership_level")?;
        self.satisfaction_score.validate("retail.satisfaction_score")?;
        if self.days_since_joined.min < 1 {
            return Err(ConfigError::InvalidValue {
                field: "retail.days_since_joined",
                reason: "customers must have joined at least one day ago".to_string(),
            });
        }
        if self.items > 0 && self.customers > 0 && self.max_purchases == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retail.max_purchases",
                reason: "must be positive".to_string(),
            });
        }
        if self.items == 0 && self.customers > 0 {
            return Err(ConfigError::EmptyVocabulary("retail.items"));
        }
        check_std_dev("retail.weights.noise_std_dev", self.weights.noise_std_dev)?;
        Ok(())
    }
}

// ============================================================================
// Top Level
// ============================================================================

/// Configuration for every dataset, loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub bank_info: BankInfoConfig,
    pub heart_disease: HeartDiseaseConfig,
    pub orders: OrdersConfig,
    pub retail: RetailConfig,
}

impl DatasetConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: DatasetConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bank_info.validate()?;
        self.heart_disease.validate()?;
        self.orders.validate()?;
        self.retail.validate()?;
        Ok(())
    }
}
