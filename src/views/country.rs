use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::{
    FiveNumber, Ranked, TimeSeries, five_number_summary, group_average, grouped_time_series, top_n,
};
use crate::config::{FieldConfig, ViewOptions};
use crate::record::{Record, retain_valid};
use crate::selection::{Selection, filter_equals};

/// Every series the country detail page draws, for one selection state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryReport {
    pub country_code: String,
    pub country_name: String,
    /// Records left after the selection (and validation, when enabled).
    pub record_count: usize,
    pub selection: Selection,
    /// Highest-paying job categories.
    pub top_categories: Vec<Ranked>,
    pub by_company_size: Vec<Ranked>,
    pub by_experience: Vec<Ranked>,
    pub experience_spread: Vec<FiveNumber>,
    pub salary_trend: Vec<TimeSeries>,
}

/// Per-country view: the country's records plus the user's selection.
///
/// Each report is recomputed from scratch; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct CountryInsights {
    code: String,
    name: String,
    records: Vec<Record>,
    fields: FieldConfig,
    options: ViewOptions,
    selection: Selection,
}

impl CountryInsights {
    /// Narrows `records` to the country whose code field equals `code`.
    #[tracing::instrument(skip_all, fields(code = %code, records = records.len()))]
    pub fn new<R: AsRef<Record>>(
        records: &[R],
        code: &str,
        fields: FieldConfig,
        options: ViewOptions,
    ) -> Self {
        let records: Vec<Record> = filter_equals(records, &fields.country_code, code)
            .into_iter()
            .cloned()
            .collect();

        let name = records
            .first()
            .and_then(|r| r.get(&fields.country_name))
            .unwrap_or(code)
            .to_string();

        info!(country = %name, records = records.len(), "Country view ready");

        Self {
            code: code.to_string(),
            name,
            records,
            fields,
            options,
            selection: Selection::default(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggles a job category and returns the recomputed report.
    pub fn toggle_category(&mut self, value: &str) -> CountryReport {
        self.selection.toggle_category(value);
        debug!(value, selected = self.selection.categories.len(), "Category toggled");
        self.report()
    }

    /// Toggles a company size and returns the recomputed report.
    pub fn toggle_size(&mut self, value: &str) -> CountryReport {
        self.selection.toggle_size(value);
        debug!(value, selected = self.selection.sizes.len(), "Size toggled");
        self.report()
    }

    /// Replaces the whole selection without computing a report.
    pub fn set_selection(&mut self, selection: Selection) {
        debug!(
            categories = selection.categories.len(),
            sizes = selection.sizes.len(),
            "Selection replaced"
        );
        self.selection = selection;
    }

    /// Empties the selection and returns the unfiltered report.
    pub fn clear_selections(&mut self) -> CountryReport {
        self.selection.clear();
        self.report()
    }

    /// Computes every series for the current selection.
    #[tracing::instrument(skip(self), fields(country = %self.code))]
    pub fn report(&self) -> CountryReport {
        let f = &self.fields;

        let filtered = self.prepare(&self.selection);

        // Selector charts optionally ignore their own dimension.
        let (for_categories, for_sizes) = if self.options.unfiltered_selectors {
            let mut sizes_only = self.selection.clone();
            sizes_only.categories.clear();
            let mut categories_only = self.selection.clone();
            categories_only.sizes.clear();
            (self.prepare(&sizes_only), self.prepare(&categories_only))
        } else {
            (filtered.clone(), filtered.clone())
        };

        debug!(records = filtered.len(), "Selection applied");

        CountryReport {
            country_code: self.code.clone(),
            country_name: self.name.clone(),
            record_count: filtered.len(),
            selection: self.selection.clone(),
            top_categories: top_n(&for_categories, &f.salary, &f.job_category, self.options.top_n),
            by_company_size: group_average(&for_sizes, &f.company_size, &f.salary),
            by_experience: group_average(&filtered, &f.experience_level, &f.salary),
            experience_spread: five_number_summary(&filtered, &f.experience_level, &f.salary),
            salary_trend: grouped_time_series(
                &filtered,
                &f.work_setting,
                &f.work_year,
                &f.salary,
                self.options.time_repr,
            ),
        }
    }

    fn prepare(&self, selection: &Selection) -> Vec<&Record> {
        let filtered = selection.filter(&self.records, &self.fields);
        if self.options.skip_invalid_measures {
            retain_valid(filtered, &self.fields.salary)
        } else {
            filtered
        }
    }
}
