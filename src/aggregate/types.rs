//! Shapes handed from the aggregation core to the rendering layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Mean of a measure over one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub key: String,
    pub value: f64,
}

/// Box-plot summary of one group.
///
/// `values` is the full ascending list the five numbers were taken from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiveNumber {
    pub key: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub values: Vec<f64>,
}

/// How a time key is represented to consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRepr {
    /// Bare year number, e.g. `2023`.
    #[default]
    Year,
    /// First day of the year, e.g. `2023-01-01`.
    YearStart,
}

/// Ordered time coordinate of a series point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TimeKey {
    Year(i32),
    Date(NaiveDate),
    /// Raw value that is not an integer year. Sorts after every parsed key.
    Unparsed(String),
}

impl TimeKey {
    /// Parses `raw` as an integer year in the requested representation.
    pub fn parse(raw: &str, repr: TimeRepr) -> Self {
        let Ok(year) = raw.trim().parse::<i32>() else {
            return TimeKey::Unparsed(raw.to_string());
        };

        match repr {
            TimeRepr::Year => TimeKey::Year(year),
            TimeRepr::YearStart => match NaiveDate::from_ymd_opt(year, 1, 1) {
                Some(date) => TimeKey::Date(date),
                None => TimeKey::Unparsed(raw.to_string()),
            },
        }
    }

    /// Variant order: years, then dates, then unparsed keys.
    fn rank(&self) -> u8 {
        match self {
            TimeKey::Year(_) => 0,
            TimeKey::Date(_) => 1,
            TimeKey::Unparsed(_) => 2,
        }
    }
}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TimeKey::Year(a), TimeKey::Year(b)) => a.cmp(b),
            (TimeKey::Date(a), TimeKey::Date(b)) => a.cmp(b),
            (TimeKey::Unparsed(a), TimeKey::Unparsed(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mean of a measure at one time coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePoint {
    pub time: TimeKey,
    pub value: f64,
}

/// One category's points, ascending by time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub category: String,
    pub points: Vec<TimePoint>,
}

/// Diverging color-scale domain for the world map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDomain {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

/// Per-key averages from a single pass plus their extrema.
///
/// With no records, `averages` is empty, `min` is +∞ and `max` is −∞.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScan {
    pub averages: BTreeMap<String, f64>,
    pub min: f64,
    pub max: f64,
}
