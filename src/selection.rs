//! User-chosen filter values narrowing which records reach the aggregates.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::config::FieldConfig;
use crate::record::Record;

/// Chosen job categories and company sizes. Empty sets do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub categories: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
}

impl Selection {
    /// Adds `value` to the category set, or removes it if already present.
    pub fn toggle_category(&mut self, value: &str) {
        toggle(&mut self.categories, value);
    }

    /// Adds `value` to the size set, or removes it if already present.
    pub fn toggle_size(&mut self, value: &str) {
        toggle(&mut self.sizes, value);
    }

    /// Empties both sets.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.sizes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.sizes.is_empty()
    }

    /// Whether `record` passes both sets.
    pub fn matches(&self, record: &Record, fields: &FieldConfig) -> bool {
        (self.categories.is_empty() || self.categories.contains(record.key(&fields.job_category)))
            && (self.sizes.is_empty() || self.sizes.contains(record.key(&fields.company_size)))
    }

    /// Records that pass the selection, in input order.
    pub fn filter<'a, R: AsRef<Record>>(
        &self,
        records: &'a [R],
        fields: &FieldConfig,
    ) -> Vec<&'a Record> {
        records
            .iter()
            .map(|r| r.as_ref())
            .filter(|r| self.matches(r, fields))
            .collect()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Records whose `field` equals `value`, in input order.
pub fn filter_equals<'a, R: AsRef<Record>>(
    records: &'a [R],
    field: &str,
    value: &str,
) -> Vec<&'a Record> {
    records
        .iter()
        .map(|r| r.as_ref())
        .filter(|r| r.get(field) == Some(value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{Ranked, group_average};

    fn fields() -> FieldConfig {
        FieldConfig {
            job_category: "cat".to_string(),
            company_size: "size".to_string(),
            salary: "salary".to_string(),
            ..FieldConfig::default()
        }
    }

    fn row(cat: &str, size: &str, salary: &str) -> Record {
        [("cat", cat), ("size", size), ("salary", salary)]
            .into_iter()
            .collect()
    }

    fn sample() -> Vec<Record> {
        vec![row("A", "S", "100"), row("A", "M", "200"), row("B", "S", "300")]
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::default();
        selection.toggle_category("A");
        assert!(selection.categories.contains("A"));
        assert!(selection.sizes.is_empty());

        selection.toggle_category("A");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear_resets_both_sets() {
        let mut selection = Selection::default();
        selection.toggle_category("A");
        selection.toggle_size("S");
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        let records = sample();
        let filtered = Selection::default().filter(&records, &fields());

        assert_eq!(filtered.len(), records.len());
        for (kept, original) in filtered.iter().zip(records.iter()) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn test_category_and_size_are_conjunctive() {
        let records = sample();
        let mut selection = Selection::default();
        selection.toggle_category("A");
        selection.toggle_size("S");

        let filtered = selection.filter(&records, &fields());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].get("salary"), Some("100"));
    }

    #[test]
    fn test_sets_accept_any_member() {
        let records = sample();
        let mut selection = Selection::default();
        selection.toggle_size("S");
        selection.toggle_size("M");

        assert_eq!(selection.filter(&records, &fields()).len(), 3);
    }

    #[test]
    fn test_filter_then_group_average() {
        let records = sample();
        let fields = fields();

        assert_eq!(
            group_average(&records, "cat", "salary"),
            vec![
                Ranked { key: "A".into(), value: 150.0 },
                Ranked { key: "B".into(), value: 300.0 },
            ]
        );

        let mut selection = Selection::default();
        selection.toggle_category("A");
        let filtered = selection.filter(&records, &fields);

        assert_eq!(
            group_average(&filtered, "cat", "salary"),
            vec![Ranked { key: "A".into(), value: 150.0 }]
        );
    }

    #[test]
    fn test_filter_equals() {
        let records = sample();
        assert_eq!(filter_equals(&records, "cat", "B").len(), 1);
        assert!(filter_equals(&records, "cat", "Z").is_empty());
        assert!(filter_equals(&records, "missing", "A").is_empty());
    }
}
