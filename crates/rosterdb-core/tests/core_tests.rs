use std::fs;

use figment::{providers::{Format, Toml}, Figment};
use tempfile::TempDir;

use rosterdb_core::config::{resolve_with_base, Config};
use rosterdb_core::error::Error;
use rosterdb_core::traits::{JsonFileSource, RecordSource};
use rosterdb_core::types::{QueryRequest, ScoreBand, SortDirection, SortField, SortSpec, StudentRecord, DEFAULT_PAGE_SIZE};

#[test]
fn json_source_reads_camel_case_and_cgpa_alias() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("students.json");
    fs::write(
        &path,
        r#"[
            {"rollNumber": "CSE2025-001", "name": "José Álvarez", "department": "CSE", "year": 1, "cgpa": 9.1},
            {"rollNumber": "ECE2025-002", "name": "Ravi", "department": "ECE", "year": 2, "score": 7.25}
        ]"#,
    )
    .unwrap();

    let records = JsonFileSource::new(&path).snapshot().expect("snapshot");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], StudentRecord::new("CSE2025-001", "José Álvarez", "CSE", 1, 9.1));
    assert_eq!(records[1].score, 7.25);
}

#[test]
fn json_source_reports_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = JsonFileSource::new(tmp.path().join("nope.json")).snapshot().unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn vec_source_returns_copy() {
    let records = vec![StudentRecord::new("A1", "Ann", "ME", 3, 6.0)];
    assert_eq!(records.snapshot().unwrap(), records);
}

#[test]
fn sort_field_and_direction_parse_or_fail_fast() {
    assert_eq!("name".parse::<SortField>(), Ok(SortField::Name));
    assert_eq!("CGPA".parse::<SortField>(), Ok(SortField::Score));
    assert_eq!("rank".parse::<SortField>(), Err(Error::InvalidSortField("rank".to_string())));
    assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Descending));
    assert_eq!("ascending".parse::<SortDirection>(), Ok(SortDirection::Ascending));
    assert_eq!("up".parse::<SortDirection>(), Err(Error::InvalidSortDirection("up".to_string())));
}

#[test]
fn sort_toggle_flips_same_field_and_resets_new_field() {
    let spec = SortSpec::default();
    assert_eq!(spec, SortSpec::new(SortField::Name, SortDirection::Ascending));

    let flipped = spec.toggle(SortField::Name);
    assert_eq!(flipped.direction, SortDirection::Descending);

    let switched = flipped.toggle(SortField::Score);
    assert_eq!(switched, SortSpec::new(SortField::Score, SortDirection::Ascending));
}

#[test]
fn default_request_is_reset_state() {
    let req = QueryRequest::default();
    assert!(req.search_text.is_empty());
    assert_eq!(req.department_filter(), None);
    assert_eq!(req.year, None);
    assert_eq!(req.page, 1);
    assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);

    assert_eq!(QueryRequest::new().with_department("all").department_filter(), None);
    assert_eq!(QueryRequest::new().with_department("ECE").department_filter(), Some("ECE"));
}

#[test]
fn score_bands_follow_badge_tiers() {
    assert_eq!(ScoreBand::of(8.5), ScoreBand::High);
    assert_eq!(ScoreBand::of(8.49), ScoreBand::Medium);
    assert_eq!(ScoreBand::of(7.0), ScoreBand::Medium);
    assert_eq!(StudentRecord::new("X", "Y", "EE", 4, 6.99).score_band(), ScoreBand::Low);
}

#[test]
fn config_reads_keys_and_rejects_bad_page_size() {
    let figment = Figment::new().merge(Toml::string("[query]\npage_size = 12\n[data]\nrecords_path = \"data/s.json\"\n"));
    let config = Config::from_figment(figment).expect("config");
    assert_eq!(config.get::<usize>("query.page_size").unwrap(), 12);
    assert_eq!(config.get_or("data.records_path", String::new()), "data/s.json");
    assert_eq!(config.get_or("query.missing", 3usize), 3);

    let bad = Figment::new().merge(Toml::string("[query]\npage_size = 0\n"));
    assert!(Config::from_figment(bad).is_err());
}

#[test]
fn resolve_with_base_keeps_absolute_paths() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(resolve_with_base(tmp.path(), "x.json"), tmp.path().join("x.json"));
    let abs = tmp.path().join("abs.json");
    assert_eq!(resolve_with_base(std::path::Path::new("/elsewhere"), abs.to_string_lossy()), abs);
}

#[test]
fn config_paths_resolve_against_base_dir() {
    let tmp = TempDir::new().unwrap();
    let figment = Figment::new().merge(Toml::string("[data]\nrecords_path = \"data/s.json\"\n"));
    let config = Config::from_figment(figment).expect("config").with_base_dir(tmp.path());
    assert_eq!(config.base_dir(), tmp.path());
    assert_eq!(config.get_path("data.records_path", "fallback.json"), tmp.path().join("data/s.json"));
    assert_eq!(config.get_path("data.missing", "fallback.json"), tmp.path().join("fallback.json"));

    let abs = tmp.path().join("abs.json");
    let figment = Figment::new().merge(Toml::string(&format!("[data]\nrecords_path = {:?}\n", abs.to_string_lossy())));
    let config = Config::from_figment(figment).expect("config").with_base_dir("/elsewhere");
    assert_eq!(config.get_path("data.records_path", "x.json"), abs);
}
