use tracing::warn;

use crate::aggregate::group::group_by;
use crate::aggregate::types::FiveNumber;
use crate::aggregate::utility::{quantile_sorted, sort_ascending};
use crate::record::Record;

/// Box-plot summary of `value_field` per distinct `key_field`, in first-seen key order.
///
/// Quartiles use linear interpolation (R-7). Empty input yields no entries.
pub fn five_number_summary<R: AsRef<Record>>(
    records: &[R],
    key_field: &str,
    value_field: &str,
) -> Vec<FiveNumber> {
    if records.is_empty() {
        warn!(key_field, value_field, "No records to summarize");
        return Vec::new();
    }

    group_by(records, key_field)
        .into_iter()
        .map(|group| {
            let mut values = group.numbers(value_field);
            sort_ascending(&mut values);
            summarize(group.key.to_string(), values)
        })
        .collect()
}

/// Five-number summary of an ascending, non-empty list.
fn summarize(key: String, values: Vec<f64>) -> FiveNumber {
    let min = values.first().copied().unwrap_or(f64::NAN);
    let max = values.last().copied().unwrap_or(f64::NAN);

    FiveNumber {
        key,
        min,
        q1: quantile_sorted(&values, 0.25),
        median: quantile_sorted(&values, 0.5),
        q3: quantile_sorted(&values, 0.75),
        max,
        values,
    }
}
