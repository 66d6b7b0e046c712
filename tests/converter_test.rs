//! Integration tests for the EELSDB converter.
//!
//! These exercise the full pipeline: a JSON record plus a companion msa
//! file in a temporary directory, converted end to end.

use std::fs;

use tempfile::tempdir;

use eelspeak::convert::{ConvertError, EelsDbConverter};
use eelspeak::record::MeasurementRecord;
use eelspeak::report::CollectingReporter;

const RECORD_JSON: &str = r#"{
    "id": 123,
    "title": "Boron Nitride Spectrum",
    "formula": "BN",
    "description": "Core-loss spectrum of hexagonal BN",
    "published": "2020-05-01 12:00:00",
    "elements": "[\"B\", \"N\"]",
    "edges": ["K"],
    "microscope": "VG HB501",
    "guntype": "cold field emission",
    "beamenergy": "100 kV",
    "max_energy": 850,
    "stepSize": "0.5 eV/pixel",
    "detector": "Parallel: Gatan 666",
    "darkcurrent": "Yes",
    "permalink": "https://eelsdb.eu/spectra/boron-nitride/",
    "api_permalink": "https://api.eelsdb.eu/spectra/boron-nitride/",
    "repository_name": "EELS Data Base",
    "author": {
        "name": "A. Scientist",
        "profile_url": "https://eelsdb.eu/author/a-scientist/",
        "profile_api_url": "https://api.eelsdb.eu/author/a-scientist/"
    }
}"#;

const SPECTRUM_MSA: &str = "\
#FORMAT : EMSA/MAS Spectral Data File
#NPOINTS : 3
#XUNITS : eV
1.0, 10
2.0, 20
3.0, 30
-record end-
";

#[test]
fn test_convert_file_pair() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("metadata.json");
    fs::write(&json_path, RECORD_JSON).unwrap();
    fs::write(dir.path().join("spectrum.msa"), SPECTRUM_MSA).unwrap();

    let mut reporter = CollectingReporter::new();
    let record = EelsDbConverter::new()
        .convert_file(&json_path, &mut reporter)
        .unwrap();

    assert_eq!(record.sample.sample_id, "123");
    assert_eq!(
        record.sample.elements,
        Some(vec!["B".to_string(), "N".to_string()])
    );
    assert_eq!(record.experiment.edges, Some(vec!["K".to_string()]));

    let spectrum = record.data.as_ref().unwrap();
    assert_eq!(spectrum.n_values, 3);
    assert_eq!(spectrum.energy, vec![1.0, 2.0, 3.0]);
    assert_eq!(spectrum.count, vec![10.0, 20.0, 30.0]);
    assert_eq!(spectrum.energy_units, "eV");

    // the only warning is the skipped trailer line
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("record end"));
}

#[test]
fn test_record_round_trips_through_json() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("metadata.json");
    fs::write(&json_path, RECORD_JSON).unwrap();
    fs::write(dir.path().join("spectrum.msa"), SPECTRUM_MSA).unwrap();

    let mut reporter = CollectingReporter::new();
    let record = EelsDbConverter::new()
        .convert_file(&json_path, &mut reporter)
        .unwrap();

    let restored = MeasurementRecord::from_json(&record.to_json().unwrap()).unwrap();

    assert_eq!(restored.sample.formula, record.sample.formula);
    assert_eq!(
        restored.experiment.experiment_publish_time,
        record.experiment.experiment_publish_time
    );
    assert_eq!(restored.data.unwrap(), record.data.unwrap());
}

#[test]
fn test_missing_companion_file_leaves_data_empty() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("metadata.json");
    fs::write(&json_path, RECORD_JSON).unwrap();

    let mut reporter = CollectingReporter::new();
    let record = EelsDbConverter::new()
        .convert_file(&json_path, &mut reporter)
        .unwrap();

    assert!(record.data.is_none());
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains(".msa"));
    // metadata fields are still populated
    assert_eq!(record.sample.formula, "BN");
    assert_eq!(record.origin.repository_name.as_deref(), Some("EELS Data Base"));
}

#[test]
fn test_missing_required_field_is_fatal_and_named() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("metadata.json");
    let without_formula = RECORD_JSON.replace("\"formula\": \"BN\",", "");
    fs::write(&json_path, without_formula).unwrap();

    let mut reporter = CollectingReporter::new();
    let err = EelsDbConverter::new()
        .convert_file(&json_path, &mut reporter)
        .unwrap_err();

    assert!(matches!(err, ConvertError::MissingField(ref field) if field == "formula"));
}

#[test]
fn test_first_msa_file_wins() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("metadata.json");
    fs::write(&json_path, RECORD_JSON).unwrap();
    fs::write(dir.path().join("a.msa"), SPECTRUM_MSA).unwrap();
    fs::write(dir.path().join("b.msa"), "#XUNITS : eV\n1.0, 1\n").unwrap();

    let mut reporter = CollectingReporter::new();
    let record = EelsDbConverter::new()
        .convert_file(&json_path, &mut reporter)
        .unwrap();

    assert_eq!(record.data.unwrap().n_values, 3);
}
