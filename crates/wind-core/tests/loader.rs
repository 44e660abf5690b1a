// File: crates/wind-core/tests/loader.rs
// Purpose: CSV loader behavior: ordering, header handling, parse policies, fatal errors.

use wind_core::{load_from_path, load_from_reader, Field, LoadError, ParsePolicy};

const HEADER: &str = "timestamp,direction,velocity\n";

fn load(body: &str, policy: ParsePolicy) -> Result<wind_core::LoadReport, LoadError> {
    let csv = format!("{HEADER}{body}");
    load_from_reader(csv.as_bytes(), policy)
}

#[test]
fn rows_keep_file_order() {
    let body = "2024-01-01 00:02:00,30.0,1.0\n\
                2024-01-01 00:00:00,10.0,2.0\n\
                2024-01-01 00:01:00,20.0,3.0\n";
    let report = load(body, ParsePolicy::Impute).expect("load");
    assert_eq!(report.len(), 3);
    let dirs: Vec<f64> = report.samples.iter().map(|s| s.direction).collect();
    assert_eq!(dirs, vec![30.0, 10.0, 20.0]);
    assert!(report.is_clean());
}

#[test]
fn header_only_yields_no_samples() {
    let report = load("", ParsePolicy::Impute).expect("load");
    assert!(report.is_empty());
    assert_eq!(report.dropped, 0);
}

#[test]
fn empty_source_yields_no_samples() {
    let report = load_from_reader("".as_bytes(), ParsePolicy::Strict).expect("load");
    assert!(report.is_empty());
}

#[test]
fn header_names_are_not_checked() {
    let csv = "a,b,c\n2024-01-01 00:00:00,1.0,2.0\n";
    let report = load_from_reader(csv.as_bytes(), ParsePolicy::Strict).expect("load");
    assert_eq!(report.len(), 1);
}

#[test]
fn extra_columns_are_ignored() {
    let csv = "timestamp,direction,velocity,gust\n2024-01-01 00:00:00,1.0,2.0,9.9\n";
    let report = load_from_reader(csv.as_bytes(), ParsePolicy::Strict).expect("load");
    assert_eq!(report.samples[0].velocity, 2.0);
}

#[test]
fn bad_direction_is_imputed_and_flagged() {
    let body = "2024-01-01 00:00:00,north,5.2\n2024-01-01 00:01:00,95.5,5.8\n";
    let report = load(body, ParsePolicy::Impute).expect("load");
    assert_eq!(report.len(), 2);
    assert_eq!(report.samples[0].direction, 0.0);
    assert_eq!(report.samples[0].velocity, 5.2);
    assert_eq!(report.issues.len(), 1);
    let issue = &report.issues[0];
    assert_eq!(issue.field, Field::Direction);
    assert_eq!(issue.line, 2);
    assert_eq!(issue.raw, "north");
}

#[test]
fn bad_timestamp_defaults_to_year_one() {
    let report = load("yesterday,10.0,1.0\n", ParsePolicy::Impute).expect("load");
    assert_eq!(report.samples[0].unix_seconds(), -62_135_596_800);
    assert_eq!(report.issues[0].field, Field::Timestamp);
}

#[test]
fn every_bad_field_is_reported() {
    let report = load("x,y,z\n", ParsePolicy::Impute).expect("load");
    let fields: Vec<Field> = report.issues.iter().map(|i| i.field).collect();
    assert_eq!(fields, vec![Field::Timestamp, Field::Direction, Field::Velocity]);
    assert_eq!(report.len(), 1);
}

#[test]
fn invalid_utf8_field_is_imputed() {
    let mut csv = HEADER.as_bytes().to_vec();
    csv.extend_from_slice(b"2024-01-01 00:00:00,");
    csv.extend_from_slice(&[0xFF, 0xFE]);
    csv.extend_from_slice(b",5.2\n2024-01-01 00:01:00,95.5,5.8\n");

    let report = load_from_reader(csv.as_slice(), ParsePolicy::Impute).expect("load");
    assert_eq!(report.len(), 2);
    assert_eq!(report.samples[0].direction, 0.0);
    assert_eq!(report.samples[0].velocity, 5.2);
    assert_eq!(report.samples[1].direction, 95.5);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].field, Field::Direction);
    assert_eq!(report.issues[0].line, 2);
}

#[test]
fn invalid_utf8_field_follows_policy() {
    let mut csv = HEADER.as_bytes().to_vec();
    csv.extend_from_slice(b"2024-01-01 00:00:00,");
    csv.extend_from_slice(&[0xFF, 0xFE]);
    csv.extend_from_slice(b",5.2\n2024-01-01 00:01:00,95.5,5.8\n");

    let report = load_from_reader(csv.as_slice(), ParsePolicy::Drop).expect("load");
    assert_eq!(report.len(), 1);
    assert_eq!(report.dropped, 1);

    let err = load_from_reader(csv.as_slice(), ParsePolicy::Strict).unwrap_err();
    assert!(matches!(err, LoadError::InvalidField { field: Field::Direction, .. }), "{err}");
}

#[test]
fn fractional_seconds_keep_real_time() {
    let report = load("2024-01-01 00:00:00.5,90.0,5.2\n", ParsePolicy::Impute).expect("load");
    assert!(report.is_clean());
    assert_eq!(report.samples[0].unix_seconds(), 1_704_067_200);
}

#[test]
fn drop_policy_omits_bad_rows() {
    let body = "2024-01-01 00:00:00,90.0,5.2\n\
                2024-01-01 00:01:00,95.5,fast\n\
                2024-01-01 00:02:00,100.0,6.1\n";
    let report = load(body, ParsePolicy::Drop).expect("load");
    assert_eq!(report.len(), 2);
    assert_eq!(report.dropped, 1);
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].line, 3);
    assert_eq!(report.samples[1].direction, 100.0);
}

#[test]
fn strict_policy_rejects_bad_rows() {
    let body = "2024-01-01 00:00:00,90.0,5.2\n2024-01-01 00:01:00,n/a,5.8\n";
    match load(body, ParsePolicy::Strict) {
        Err(LoadError::InvalidField { line, field, raw, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(field, Field::Direction);
            assert_eq!(raw, "n/a");
        }
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn too_few_fields_is_fatal() {
    let csv = "timestamp,direction\n2024-01-01 00:00:00,90.0\n";
    let err = load_from_reader(csv.as_bytes(), ParsePolicy::Impute).unwrap_err();
    assert!(matches!(err, LoadError::MissingFields { found: 2, .. }), "{err}");
}

#[test]
fn ragged_rows_are_fatal() {
    let err = load("2024-01-01 00:00:00,90.0\n", ParsePolicy::Impute).unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)), "{err}");
}

#[test]
fn missing_file_is_fatal() {
    let err = load_from_path("target/test_out/does_not_exist.csv", ParsePolicy::Impute).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn loads_from_disk() {
    let path = std::path::PathBuf::from("target/test_out/wind_loader.csv");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, format!("{HEADER}2024-01-01 00:00:00,90.0,5.2\n")).unwrap();

    let report = load_from_path(&path, ParsePolicy::Impute).expect("load");
    assert_eq!(report.len(), 1);
    assert_eq!(report.samples[0].direction, 90.0);
}
