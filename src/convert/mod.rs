//! Conversion of EELSDB exports into [`MeasurementRecord`] trees.
//!
//! The converter reads a JSON metadata record, locates the companion `.msa`
//! spectrum export in the same directory (when present), and assembles the
//! output record from per-section builder functions. Fatal problems
//! (missing required fields, malformed timestamps, unreadable files)
//! surface as [`ConvertError`]; everything else degrades to reporter
//! warnings.

mod error;
mod mapper;


pub use error::ConvertError;
pub use mapper::{RawRecord, PUBLISH_TIME_FORMAT};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::msa::MsaFile;
use crate::record::{MeasurementRecord, Spectrum};
use crate::report::Reporter;

/// Content marker identifying an EELSDB record export.
pub const EELSDB_CONTENT_MARKER: &str = "https://eelsdb.eu/spectra";

/// Converter for one EELSDB JSON/msa file pair.
#[derive(Debug, Default)]
pub struct EelsDbConverter;

impl EelsDbConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self
    }

    /// True when `content` looks like an EELSDB record export.
    pub fn matches(content: &str) -> bool {
        content.contains(EELSDB_CONTENT_MARKER)
    }

    /// Convert the JSON record at `path`, reading the companion msa file
    /// from the same directory when one exists.
    pub fn convert_file(
        &self,
        path: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<MeasurementRecord, ConvertError> {
        let content = fs::read_to_string(path)?;
        if !Self::matches(&content) {
            reporter.warning("Input does not look like an EELSDB record export");
        }
        let raw = parse_raw_record(&content)?;

        // parent() yields "" for a bare file name; read_dir needs "."
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let spectrum = match find_companion_msa(directory)? {
            Some(msa_path) => Some(MsaFile::from_file(msa_path, reporter)?.spectrum),
            None => {
                reporter.warning("No companion .msa file found; data section left empty");
                None
            }
        };

        self.map_record(&raw, spectrum)
    }

    /// Assemble a record from an already-read raw record and an optional
    /// spectrum. Sections are built leaf-first and attached once.
    pub fn map_record(
        &self,
        raw: &RawRecord,
        spectrum: Option<Spectrum>,
    ) -> Result<MeasurementRecord, ConvertError> {
        let sample = mapper::map_sample(raw)?;
        let experiment = mapper::map_experiment(raw)?;
        let instrument = mapper::map_instrument(raw)?;
        let origin = mapper::map_origin(raw)?;

        Ok(MeasurementRecord {
            sample,
            experiment,
            instrument,
            origin,
            data: spectrum,
        })
    }
}

/// Parse the raw JSON text into the record object.
fn parse_raw_record(content: &str) -> Result<RawRecord, ConvertError> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        _ => Err(ConvertError::InvalidFormat(
            "record root is not a JSON object".to_string(),
        )),
    }
}

/// Locate the companion msa file: the lexicographically first `*.msa`
/// entry in `directory`, or `None` when there is none.
pub fn find_companion_msa(directory: &Path) -> Result<Option<PathBuf>, ConvertError> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(directory)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "msa"))
        .collect();
    candidates.sort();
    Ok(candidates.into_iter().next())
}
