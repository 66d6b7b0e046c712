//! Parser for EMSA/MAS ".msa" instrument exports.
//!
//! An msa file is a plain-text export: `#KEY: value` header lines followed
//! by comma-separated `energy, count` data rows and often a non-data
//! trailer line. The parser is a single pass over the lines; anything that
//! is neither a header nor a data row is reported as a warning and skipped.

mod error;

#[cfg(test)]
mod tests;

pub use error::MsaError;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::record::Spectrum;
use crate::report::Reporter;

/// Energy unit assumed when the export does not state a usable one.
pub const DEFAULT_ENERGY_UNITS: &str = "eV";

/// Parsed contents of one msa file: the raw header map plus the spectrum.
#[derive(Debug, Clone)]
pub struct MsaFile {
    /// Header key/value pairs; the last occurrence of a duplicate key wins
    pub metadata: HashMap<String, String>,

    /// The (energy, count) data rows in file order
    pub spectrum: Spectrum,
}

impl MsaFile {
    /// Parse an msa file from disk.
    ///
    /// An unreadable file is a hard failure; everything else degrades to
    /// warnings on `reporter`. An empty file parses to an empty spectrum.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        reporter: &mut dyn Reporter,
    ) -> Result<Self, MsaError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), reporter)
    }

    /// Parse msa content from any buffered reader.
    pub fn from_reader<R: BufRead>(
        reader: R,
        reporter: &mut dyn Reporter,
    ) -> Result<Self, MsaError> {
        let mut metadata = HashMap::new();
        let mut energies = Vec::new();
        let mut counts = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if let Some((key, value)) = parse_header_line(&line) {
                metadata.insert(key, value);
            } else if let Some((energy, count)) = parse_data_line(&line) {
                energies.push(energy);
                counts.push(count);
            } else {
                reporter.warning(&format!("Unexpected line format in msa file: {line:?}"));
            }
        }

        let energy_units = resolve_energy_units(&metadata, reporter);
        check_n_points(&metadata, energies.len(), reporter);

        Ok(Self {
            metadata,
            spectrum: Spectrum::new(energies, energy_units, counts),
        })
    }
}

/// Match a `#KEY: value` header line; keys are uppercase ASCII or digits,
/// with optional spaces around the key. The value is stored trimmed.
fn parse_header_line(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix('#')?.trim_start();
    let key_len = rest
        .find(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
        .unwrap_or(rest.len());
    if key_len == 0 {
        return None;
    }
    let (key, rest) = rest.split_at(key_len);
    let value = rest.trim_start().strip_prefix(':')?;
    Some((key.to_string(), value.trim().to_string()))
}

/// Match an `energy, count` data row: two plain decimal numbers separated
/// by a comma and optional whitespace.
fn parse_data_line(line: &str) -> Option<(f64, f64)> {
    let (x, y) = line.trim().split_once(',')?;
    Some((parse_decimal(x.trim_end())?, parse_decimal(y.trim_start())?))
}

/// Parse a decimal number of the form `-?digits[.digits]`.
///
/// Stricter than `f64::from_str`: exponents, lone dots, and surrounding
/// garbage all fail, so malformed rows surface as warnings instead of
/// being half-read.
fn parse_decimal(s: &str) -> Option<f64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    s.parse().ok()
}

/// Resolve the energy axis unit from the `XUNITS` header. Absent, empty,
/// or "undefined" (in any case) falls back to [`DEFAULT_ENERGY_UNITS`].
fn resolve_energy_units(
    metadata: &HashMap<String, String>,
    reporter: &mut dyn Reporter,
) -> String {
    match metadata.get("XUNITS") {
        Some(units) if !units.is_empty() && !units.to_lowercase().contains("undefined") => {
            units.clone()
        }
        _ => {
            reporter.warning("Unknown energy units; assuming eV");
            DEFAULT_ENERGY_UNITS.to_string()
        }
    }
}

/// Compare a present `NPOINTS` header against the observed data row count.
/// The observed count stays authoritative either way.
fn check_n_points(
    metadata: &HashMap<String, String>,
    observed: usize,
    reporter: &mut dyn Reporter,
) {
    let Some(raw) = metadata.get("NPOINTS") else {
        return;
    };
    match raw.parse::<usize>() {
        Ok(expected) if expected != observed => reporter.warning(&format!(
            "NPOINTS header ({expected}) does not match the number of data rows ({observed})"
        )),
        Ok(_) => {}
        Err(_) => reporter.warning(&format!("Ignoring malformed NPOINTS header: {raw:?}")),
    }
}
