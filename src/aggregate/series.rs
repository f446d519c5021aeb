use std::collections::HashMap;

use crate::aggregate::group::group_by;
use crate::aggregate::types::{TimeKey, TimePoint, TimeRepr, TimeSeries};
use crate::aggregate::utility::mean;
use crate::record::Record;

/// One series per distinct `category_field`, averaging `value_field` per time key.
///
/// Categories come out in first-seen order. Each series is strictly ascending
/// by the integer-year reading of `time_field`; values that are not integer
/// years are kept as unparsed keys after the parsed ones.
pub fn grouped_time_series<R: AsRef<Record>>(
    records: &[R],
    category_field: &str,
    time_field: &str,
    value_field: &str,
    repr: TimeRepr,
) -> Vec<TimeSeries> {
    group_by(records, category_field)
        .into_iter()
        .map(|group| {
            let mut cells: Vec<(TimeKey, Vec<f64>)> = Vec::new();
            let mut positions: HashMap<TimeKey, usize> = HashMap::new();

            for record in &group.members {
                let time = TimeKey::parse(record.key(time_field), repr);
                let pos = *positions.entry(time.clone()).or_insert_with(|| {
                    cells.push((time, Vec::new()));
                    cells.len() - 1
                });
                cells[pos].1.push(record.number(value_field));
            }

            let mut points: Vec<TimePoint> = cells
                .into_iter()
                .map(|(time, values)| TimePoint {
                    time,
                    value: mean(&values),
                })
                .collect();
            points.sort_by(|a, b| a.time.cmp(&b.time));

            TimeSeries {
                category: group.key.to_string(),
                points,
            }
        })
        .collect()
}
