use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Method name recorded on every converted experiment.
pub const METHOD_NAME: &str = "electron energy loss spectroscopy";

/// Abbreviated method name.
pub const METHOD_ABBREVIATION: &str = "EELS";

/// Experiment-level metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    /// Record identifier, shared with the sample section
    pub experiment_id: String,

    /// Full method name ([`METHOD_NAME`])
    pub method_name: String,

    /// Method abbreviation ([`METHOD_ABBREVIATION`])
    pub method_abbreviation: String,

    /// Publication time of the source record
    pub experiment_publish_time: NaiveDateTime,

    /// Observed ionization edges (e.g. "K", "L3")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<String>>,

    /// Free-text description of the measurement
    pub description: String,
}
