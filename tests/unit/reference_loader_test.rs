// Tests for the currency/zone reference-data loaders, including the
// file-backed entry points.

use std::fs;

use commercekit::core::AppError;
use commercekit::reference::services::currencies_loader::{
    load_currencies, load_currencies_from_path,
};
use commercekit::reference::services::zones_loader::{load_zones, load_zones_from_path};

fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_zones_document_round_trip_through_disk() {
    let path = temp_file(
        "commercekit_zones_test.json",
        r#"{
            "zones": [
                {"code": "QC", "countryCode": "CA", "names": {"en": "Quebec", "fr": "Québec"}},
                {"code": "ON", "countryCode": "CA", "names": {"en": "Ontario"}}
            ]
        }"#,
    );

    let zones = load_zones_from_path(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].id, 1);
    assert_eq!(zones[1].id, 2);
    assert_eq!(zones[0].name_for("fr"), "Québec");
}

#[test]
fn test_missing_zones_file_is_an_io_error() {
    let result = load_zones_from_path("/nonexistent/zones.json");
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_zones_validation_failures_are_configuration_errors() {
    for bad in [
        "{\"zones\": [",
        r#"{"zones": [{"code": "", "countryCode": "CA"}]}"#,
        r#"{"zones": [{"code": "QC", "countryCode": "CAN"}]}"#,
        r#"{"zones": [{"code": "QC", "countryCode": "CA"}, {"code": "QC", "countryCode": "CA"}]}"#,
    ] {
        let result = load_zones(bad);
        assert!(
            matches!(result, Err(AppError::Configuration(_))),
            "expected configuration error for: {}",
            bad
        );
    }
}

#[test]
fn test_currencies_document_round_trip_through_disk() {
    let path = temp_file(
        "commercekit_currencies_test.json",
        r#"{
            "currencies": [
                {"code": "CAD", "name": "Canadian Dollar", "scale": 2},
                {"code": "USD", "name": "US Dollar", "scale": 2},
                {"code": "JPY", "name": "Japanese Yen", "scale": 0}
            ]
        }"#,
    );

    let currencies = load_currencies_from_path(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(currencies.len(), 3);
    assert_eq!(currencies[2].scale, 0);
}

#[test]
fn test_currencies_validation_failures_are_configuration_errors() {
    for bad in [
        r#"{"currencies": [{"code": "ca", "name": "x", "scale": 2}]}"#,
        r#"{"currencies": [{"code": "CAD", "name": "x", "scale": 9}]}"#,
        r#"{"currencies": [{"code": "CAD", "name": "x", "scale": 2}, {"code": "CAD", "name": "y", "scale": 2}]}"#,
    ] {
        let result = load_currencies(bad);
        assert!(
            matches!(result, Err(AppError::Configuration(_))),
            "expected configuration error for: {}",
            bad
        );
    }
}
