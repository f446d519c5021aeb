use salary_insights::aggregate::{TimeKey, five_number_summary};
use salary_insights::config::{FieldConfig, ViewOptions};
use salary_insights::fetch::load_records;
use salary_insights::parser::parse_records;
use salary_insights::views::{CountryInsights, WorldMap, country_index};

fn fixture() -> Vec<salary_insights::record::Record> {
    let bytes = include_bytes!("fixtures/sample_salaries.csv");
    parse_records(bytes).expect("Failed to parse fixture")
}

#[test]
fn test_world_map_pipeline() {
    let records = fixture();
    let map = WorldMap::build(&records, &FieldConfig::default());

    assert_eq!(map.scan.averages.len(), 3);
    assert_eq!(map.scan.averages["USA"], 790000.0 / 6.0);
    assert_eq!(map.scan.averages["DEU"], 70000.0);
    assert_eq!(map.scan.min, 29000.0);
    assert_eq!(map.scan.max, map.scan.averages["USA"]);

    let domain = map.domain.expect("fixture has a salary range");
    assert_eq!(domain.mid, (domain.low + domain.high) / 2.0);
}

#[test]
fn test_country_pipeline_with_toggles() {
    let records = fixture();
    let mut view =
        CountryInsights::new(&records, "USA", FieldConfig::default(), ViewOptions::default());

    let report = view.report();
    assert_eq!(report.country_name, "United States");
    assert_eq!(report.record_count, 6);
    assert_eq!(report.top_categories[0].key, "Data Science and Research");
    assert_eq!(report.top_categories[0].value, 160000.0);

    let remote = report
        .salary_trend
        .iter()
        .find(|s| s.category == "Remote")
        .unwrap();
    let years: Vec<_> = remote.points.iter().map(|p| p.time.clone()).collect();
    assert_eq!(
        years,
        vec![TimeKey::Year(2021), TimeKey::Year(2022), TimeKey::Year(2023)]
    );

    let filtered = view.toggle_size("L");
    assert_eq!(filtered.record_count, 3);
    assert_eq!(filtered.by_experience[0].key, "Mid-level");
    assert_eq!(filtered.by_experience[0].value, 115000.0);

    let cleared = view.clear_selections();
    assert_eq!(cleared, report);
}

#[test]
fn test_both_selections_narrow_category_ranking() {
    let records = fixture();
    let mut view =
        CountryInsights::new(&records, "USA", FieldConfig::default(), ViewOptions::default());

    view.toggle_category("Data Science and Research");
    let report = view.toggle_size("L");

    let categories: Vec<_> = report.top_categories.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(categories, vec!["Data Science and Research"]);
    assert_eq!(report.top_categories[0].value, 140000.0);
    assert_eq!(report.by_company_size.len(), 1);
    assert_eq!(report.by_company_size[0].key, "L");
}

#[test]
fn test_box_plot_matches_direct_call() {
    let records = fixture();
    let view =
        CountryInsights::new(&records, "USA", FieldConfig::default(), ViewOptions::default());
    let report = view.report();

    let direct = five_number_summary(view.records(), "experience_level", "salary_in_usd");
    assert_eq!(report.experience_spread, direct);

    let senior = &direct[0];
    assert_eq!(senior.key, "Senior");
    assert_eq!(senior.values, vec![150000.0, 160000.0, 180000.0]);
    assert_eq!(senior.q1, 155000.0);
    assert_eq!(senior.median, 160000.0);
    assert_eq!(senior.q3, 170000.0);
}

#[test]
fn test_country_index_from_fixture() {
    let records = fixture();
    let index = country_index(&records, &FieldConfig::default());

    let codes: Vec<_> = index.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["USA", "DEU", "IND"]);
    assert_eq!(index[1].name, "Germany");
}

#[tokio::test]
async fn test_load_fixture_from_disk() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_salaries.csv");
    let records = load_records(path).await.unwrap();
    assert_eq!(records.len(), 9);
}
