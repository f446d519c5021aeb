//! Field selectors and view settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::aggregate::TimeRepr;

/// Default dataset location when neither the CLI nor the environment names one.
pub const DEFAULT_SOURCE: &str = "data/jobs_in_data_with_iso_updated.csv";

/// Maps each role the views need to a column of the dataset.
///
/// Stored as a JSON object; omitted keys keep the survey's column names:
/// ```json
/// {
///   "country_code": "ISO",
///   "salary": "salary_in_usd"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub country_code: String,
    pub country_name: String,
    pub salary: String,
    pub job_category: String,
    pub company_size: String,
    pub experience_level: String,
    pub work_year: String,
    pub work_setting: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            country_code: "ISO".to_string(),
            country_name: "company_location".to_string(),
            salary: "salary_in_usd".to_string(),
            job_category: "job_category".to_string(),
            company_size: "company_size".to_string(),
            experience_level: "experience_level".to_string(),
            work_year: "work_year".to_string(),
            work_setting: "work_setting".to_string(),
        }
    }
}

impl FieldConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read field config '{path}'"))?;
        Self::from_json(&content).with_context(|| format!("Invalid field config '{path}'"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads from `path` when given, otherwise the survey defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Settings for the per-country view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// How many job categories the ranking keeps.
    pub top_n: usize,
    /// Representation of the salary-trend time axis.
    pub time_repr: TimeRepr,
    /// Drop records whose salary does not coerce instead of letting NaN through.
    pub skip_invalid_measures: bool,
    /// Compute the job-category ranking without the category selection and the
    /// company-size averages without the size selection.
    pub unfiltered_selectors: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            top_n: 5,
            time_repr: TimeRepr::Year,
            skip_invalid_measures: false,
            unfiltered_selectors: false,
        }
    }
}
