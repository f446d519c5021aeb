use std::collections::HashMap;

use crate::aggregate::types::Ranked;
use crate::aggregate::utility::{descending, mean};
use crate::record::Record;

/// Records sharing one key value, in input order.
#[derive(Debug)]
pub struct Group<'a> {
    pub key: &'a str,
    pub members: Vec<&'a Record>,
}

impl Group<'_> {
    /// Coerced `field` of every member, in member order.
    pub fn numbers(&self, field: &str) -> Vec<f64> {
        self.members.iter().map(|r| r.number(field)).collect()
    }
}

/// Partitions `records` by the value of `key_field`, preserving first-seen key order.
pub fn group_by<'a, R: AsRef<Record>>(records: &'a [R], key_field: &str) -> Vec<Group<'a>> {
    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for record in records {
        let record = record.as_ref();
        let key = record.key(key_field);
        let pos = *positions.entry(key).or_insert_with(|| {
            groups.push(Group {
                key,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[pos].members.push(record);
    }

    groups
}

/// Mean of `value_field` per distinct `key_field`, in first-seen key order.
///
/// Values that do not coerce to a number are NaN and poison their group's mean.
pub fn group_average<R: AsRef<Record>>(
    records: &[R],
    key_field: &str,
    value_field: &str,
) -> Vec<Ranked> {
    group_by(records, key_field)
        .into_iter()
        .map(|group| Ranked {
            key: group.key.to_string(),
            value: mean(&group.numbers(value_field)),
        })
        .collect()
}

/// The `n` groups with the highest mean `value_field`, highest first.
///
/// Ties keep their first-seen order. NaN means rank below every number.
pub fn top_n<R: AsRef<Record>>(
    records: &[R],
    value_field: &str,
    key_field: &str,
    n: usize,
) -> Vec<Ranked> {
    let mut ranked = group_average(records, key_field, value_field);
    rank_descending(&mut ranked);
    ranked.truncate(n);
    ranked
}

/// Stable descending sort by value.
pub fn rank_descending(entries: &mut [Ranked]) {
    entries.sort_by(|a, b| descending(a.value, b.value));
}
