use std::io::Cursor;

use proptest::prelude::*;

use super::*;
use crate::report::CollectingReporter;

const SAMPLE_MSA: &str = "\
#FORMAT : EMSA/MAS Spectral Data File
#NPOINTS : 3
#XUNITS : eV
1.0, 10
2.0, 20
3.0, 30
";

fn parse(input: &str) -> (MsaFile, CollectingReporter) {
    let mut reporter = CollectingReporter::new();
    let msa = MsaFile::from_reader(Cursor::new(input), &mut reporter).unwrap();
    (msa, reporter)
}

#[test]
fn test_headers_and_data_rows() {
    let (msa, reporter) = parse(SAMPLE_MSA);

    assert_eq!(
        msa.metadata.get("FORMAT").map(String::as_str),
        Some("EMSA/MAS Spectral Data File")
    );
    assert_eq!(msa.spectrum.n_values, 3);
    assert_eq!(msa.spectrum.energy, vec![1.0, 2.0, 3.0]);
    assert_eq!(msa.spectrum.count, vec![10.0, 20.0, 30.0]);
    assert_eq!(msa.spectrum.energy_units, "eV");
    assert!(reporter.is_empty());
}

#[test]
fn test_duplicate_header_last_wins() {
    let (msa, _) = parse("#XUNITS : counts\n#XUNITS : eV\n1, 2\n");

    assert_eq!(msa.metadata.get("XUNITS").map(String::as_str), Some("eV"));
}

#[test]
fn test_missing_xunits_defaults_to_ev() {
    let (msa, reporter) = parse("1.0, 10\n2.0, 20\n");

    assert_eq!(msa.spectrum.energy_units, "eV");
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("energy units"));
}

#[test]
fn test_undefined_xunits_defaults_to_ev() {
    let (msa, reporter) = parse("#XUNITS : Undefined\n1.0, 10\n");

    assert_eq!(msa.spectrum.energy_units, "eV");
    assert_eq!(reporter.warnings().len(), 1);
}

#[test]
fn test_npoints_mismatch_warns_but_observed_count_wins() {
    let (msa, reporter) = parse("#NPOINTS : 5\n#XUNITS : eV\n1.0, 10\n2.0, 20\n");

    assert_eq!(msa.spectrum.n_values, 2);
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("NPOINTS"));
}

#[test]
fn test_malformed_npoints_is_ignored_with_warning() {
    let (msa, reporter) = parse("#NPOINTS : many\n#XUNITS : eV\n1.0, 10\n");

    assert_eq!(msa.spectrum.n_values, 1);
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("NPOINTS"));
}

#[test]
fn test_unrecognized_lines_warn_and_are_skipped() {
    let (msa, reporter) = parse("#XUNITS : eV\n1.0, 10\n-record end-\n");

    assert_eq!(msa.spectrum.n_values, 1);
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("-record end-"));
}

#[test]
fn test_negative_and_fractional_values() {
    let (msa, _) = parse("#XUNITS : eV\n-1.5, -3\n-0.25, 7.125\n");

    assert_eq!(msa.spectrum.energy, vec![-1.5, -0.25]);
    assert_eq!(msa.spectrum.count, vec![-3.0, 7.125]);
}

#[test]
fn test_exponents_and_partial_rows_are_not_data() {
    let (msa, reporter) = parse("#XUNITS : eV\n1e3, 10\n2.0, 20 trailing\n3., 30\n");

    assert_eq!(msa.spectrum.n_values, 0);
    assert_eq!(reporter.warnings().len(), 3);
}

#[test]
fn test_empty_file() {
    let (msa, reporter) = parse("");

    assert_eq!(msa.spectrum.n_values, 0);
    assert!(msa.spectrum.is_empty());
    assert!(msa.metadata.is_empty());
    // only the missing-units warning
    assert_eq!(reporter.warnings().len(), 1);
}

#[test]
fn test_reparse_is_deterministic() {
    let (first, _) = parse(SAMPLE_MSA);
    let (second, _) = parse(SAMPLE_MSA);

    assert_eq!(first.spectrum, second.spectrum);
    assert_eq!(first.metadata, second.metadata);
}

proptest! {
    #[test]
    fn prop_energy_and_count_stay_parallel(
        rows in prop::collection::vec((-1.0e6f64..1.0e6, -1.0e6f64..1.0e6), 0..64),
    ) {
        let mut input = String::from("#XUNITS : eV\n");
        for (energy, count) in &rows {
            input.push_str(&format!("{energy:.3}, {count:.3}\n"));
        }

        let mut reporter = CollectingReporter::new();
        let msa = MsaFile::from_reader(Cursor::new(input), &mut reporter).unwrap();

        prop_assert_eq!(msa.spectrum.n_values, rows.len());
        prop_assert_eq!(msa.spectrum.energy.len(), msa.spectrum.count.len());
    }
}
