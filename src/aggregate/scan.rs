use std::collections::BTreeMap;

use crate::aggregate::types::{ColorDomain, MapScan};
use crate::record::Record;

/// Running sum and count for one key.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    sum: f64,
    count: usize,
}

/// Averages `value_field` per `key_field` in one pass and finds the extrema of those averages.
///
/// NaN averages take no part in `min`/`max`.
pub fn global_scan<R: AsRef<Record>>(records: &[R], key_field: &str, value_field: &str) -> MapScan {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for record in records {
        let record = record.as_ref();
        let tally = tallies.entry(record.key(key_field).to_string()).or_default();
        tally.sum += record.number(value_field);
        tally.count += 1;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    let averages = tallies
        .into_iter()
        .map(|(key, tally)| {
            let avg = tally.sum / tally.count as f64;
            if avg < min {
                min = avg;
            }
            if avg > max {
                max = avg;
            }
            (key, avg)
        })
        .collect();

    MapScan { averages, min, max }
}

impl MapScan {
    /// Average for `key`, or `None` when the map has no usable data for it.
    ///
    /// A zero or NaN average counts as no data.
    pub fn lookup(&self, key: &str) -> Option<f64> {
        self.averages
            .get(key)
            .copied()
            .filter(|avg| *avg != 0.0 && !avg.is_nan())
    }

    /// Diverging color domain `[min, midpoint, max]`, or `None` without a finite range.
    pub fn color_domain(&self) -> Option<ColorDomain> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return None;
        }
        Some(ColorDomain {
            low: self.min,
            mid: (self.min + self.max) / 2.0,
            high: self.max,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}

impl ColorDomain {
    /// Position of `value` on a diverging scale: 0 at `low`, 0.5 at `mid`, 1 at `high`.
    ///
    /// Values outside the domain are clamped. A collapsed half maps to 0.5.
    pub fn position(&self, value: f64) -> f64 {
        let t = if value < self.mid {
            if self.mid == self.low {
                0.5
            } else {
                0.5 * (value - self.low) / (self.mid - self.low)
            }
        } else if self.high == self.mid {
            0.5
        } else {
            0.5 + 0.5 * (value - self.mid) / (self.high - self.mid)
        };
        t.clamp(0.0, 1.0)
    }
}
