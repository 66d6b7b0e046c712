use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use eelspeak::convert::EelsDbConverter;
use eelspeak::report::LogReporter;

/// Convert a JSON record (and companion msa file) to an archive record
pub fn run(input: PathBuf, output: Option<PathBuf>, compact: bool, stdout: bool) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let output = output.unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        input.with_file_name(format!("{}.record.json", stem))
    });

    info!("eelsPeak Converter - EELSDB record to archive record");
    info!("Input:  {}", input.display());
    if !stdout {
        info!("Output: {}", output.display());
    }

    let mut reporter = LogReporter::new();
    let record = EelsDbConverter::new()
        .convert_file(&input, &mut reporter)
        .with_context(|| format!("Conversion failed for {}", input.display()))?;

    let json = if compact {
        record.to_json()
    } else {
        record.to_json_pretty()
    }
    .context("Failed to serialize record")?;

    if stdout {
        println!("{json}");
    } else {
        fs::write(&output, json)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    info!("Conversion complete!");
    info!(
        "  Sample: {} ({})",
        record.sample.sample_title, record.sample.formula
    );
    match &record.data {
        Some(spectrum) => info!(
            "  Spectrum: {} points [{}]",
            spectrum.n_values, spectrum.energy_units
        ),
        None => info!("  Spectrum: none"),
    }

    Ok(())
}
