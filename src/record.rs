//! Flat, string-keyed survey rows and the numeric coercion applied to them.

use serde::Serialize;
use std::collections::HashMap;

/// Key used for a record that has no value for the grouping field.
pub const MISSING_KEY: &str = "undefined";

/// One row of the salary survey. Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Grouping key for `field`. A missing field is its own group.
    pub fn key(&self, field: &str) -> &str {
        self.get(field).unwrap_or(MISSING_KEY)
    }

    /// Coerced numeric value of `field`, NaN when it does not coerce.
    pub fn number(&self, field: &str) -> f64 {
        coerce_number(self.get(field))
    }

    /// Coerced value of `field` together with whether the coercion succeeded.
    pub fn measure(&self, field: &str) -> Measure {
        Measure::from_raw(self.get(field))
    }
}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record {
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A coerced measure value with an explicit validity flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measure {
    pub value: f64,
    pub valid: bool,
}

impl Measure {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let value = coerce_number(raw);
        Self {
            value,
            valid: !value.is_nan(),
        }
    }
}

/// Loose numeric coercion of a raw field value.
///
/// | Input                    | Result           |
/// |--------------------------|------------------|
/// | missing                  | NaN              |
/// | empty / whitespace only  | 0                |
/// | `Infinity`, `-Infinity`  | ±∞               |
/// | decimal / exponent text  | the parsed float |
/// | anything else            | NaN              |
pub fn coerce_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };

    let text = raw.trim();
    match text {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        t if t.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => f64::NAN,
        t => t.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Keeps only the records whose `field` coerces to a number.
pub fn retain_valid<R: AsRef<Record>>(records: Vec<R>, field: &str) -> Vec<R> {
    records
        .into_iter()
        .filter(|r| r.as_ref().measure(field).valid)
        .collect()
}
