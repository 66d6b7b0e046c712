use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use eelspeak::convert::EelsDbConverter;
use eelspeak::msa::MsaFile;
use eelspeak::report::CollectingReporter;

/// Display information about an msa export or a JSON record
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    match file.extension().and_then(|ext| ext.to_str()) {
        Some("msa") => msa_info(&file),
        Some("json") => record_info(&file),
        _ => anyhow::bail!("Unsupported file type: {}", file.display()),
    }
}

fn msa_info(file: &Path) -> Result<()> {
    let mut reporter = CollectingReporter::new();
    let msa = MsaFile::from_file(file, &mut reporter).context("Failed to parse msa file")?;

    println!("MSA Export Information");
    println!("======================");
    println!("File: {}", file.display());
    println!();
    println!("Data points: {}", msa.spectrum.n_values);
    println!("Energy unit: {}", msa.spectrum.energy_units);
    println!();

    if !msa.metadata.is_empty() {
        println!("Header:");
        let mut keys: Vec<_> = msa.metadata.keys().collect();
        keys.sort();
        for key in keys {
            println!("  {}: {}", key, msa.metadata[key]);
        }
        println!();
    }

    print_warnings(&reporter);
    Ok(())
}

fn record_info(file: &Path) -> Result<()> {
    let mut reporter = CollectingReporter::new();
    let record = EelsDbConverter::new()
        .convert_file(file, &mut reporter)
        .with_context(|| format!("Conversion failed for {}", file.display()))?;

    println!("EELS Record Information");
    println!("=======================");
    println!("File: {}", file.display());
    println!();
    println!("Sample:");
    println!("  Title:   {}", record.sample.sample_title);
    println!("  Formula: {}", record.sample.formula);
    if let Some(elements) = &record.sample.elements {
        println!("  Elements: {}", elements.join(", "));
    }
    println!();
    println!("Experiment:");
    println!(
        "  Method:    {} ({})",
        record.experiment.method_name, record.experiment.method_abbreviation
    );
    println!("  Published: {}", record.experiment.experiment_publish_time);
    println!();
    println!("Instrument: {}", record.instrument.source_label);
    println!("Origin:     {}", record.origin.permalink);
    match &record.data {
        Some(spectrum) => println!(
            "Spectrum:   {} points [{}]",
            spectrum.n_values, spectrum.energy_units
        ),
        None => println!("Spectrum:   none"),
    }
    println!();

    print_warnings(&reporter);
    Ok(())
}

fn print_warnings(reporter: &CollectingReporter) {
    if !reporter.is_empty() {
        println!("Warnings:");
        for warning in reporter.warnings() {
            println!("  - {warning}");
        }
    }
}
