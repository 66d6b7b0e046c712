use serde::{Deserialize, Serialize};

use super::{Experiment, Instrument, Origin, RecordError, Sample, Spectrum};

/// Complete converted record for one EELS measurement.
///
/// Built once per JSON/msa file pair and immutable afterwards; the caller
/// owns the record and decides where it is archived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Sample section
    pub sample: Sample,

    /// Experiment section
    pub experiment: Experiment,

    /// Instrument section
    pub instrument: Instrument,

    /// Origin section
    pub origin: Origin,

    /// Measured spectrum, absent when no companion msa file was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Spectrum>,
}

impl MeasurementRecord {
    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to human-readable JSON
    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}
