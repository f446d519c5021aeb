use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregate::{ColorDomain, MapScan, global_scan, group_by};
use crate::config::FieldConfig;
use crate::record::Record;

/// Average salary per country code, with the map's color domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldMap {
    pub scan: MapScan,
    pub domain: Option<ColorDomain>,
}

impl WorldMap {
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub fn build<R: AsRef<Record>>(records: &[R], fields: &FieldConfig) -> Self {
        let scan = global_scan(records, &fields.country_code, &fields.salary);
        let domain = scan.color_domain();

        if domain.is_none() {
            warn!("No finite salary range, map has no color domain");
        }
        debug!(countries = scan.averages.len(), min = scan.min, max = scan.max, "Map scan complete");

        Self { scan, domain }
    }

    /// Normalized color position for `code`, or `None` when it is drawn as "no data".
    pub fn shade(&self, code: &str) -> Option<f64> {
        let domain = self.domain?;
        self.scan.lookup(code).map(|avg| domain.position(avg))
    }
}

/// One country present in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
    pub records: usize,
}

/// Distinct countries in first-seen order, named after their first record.
pub fn country_index<R: AsRef<Record>>(records: &[R], fields: &FieldConfig) -> Vec<CountryEntry> {
    group_by(records, &fields.country_code)
        .into_iter()
        .map(|group| CountryEntry {
            code: group.key.to_string(),
            name: group
                .members
                .first()
                .and_then(|r| r.get(&fields.country_name))
                .unwrap_or(group.key)
                .to_string(),
            records: group.members.len(),
        })
        .collect()
}
