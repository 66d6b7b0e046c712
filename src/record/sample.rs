use serde::{Deserialize, Serialize};

/// Sample metadata for the measured material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Chemical formula of the measured material
    pub formula: String,

    /// Record identifier, as a string (source records use numeric ids)
    pub sample_id: String,

    /// Human-readable record title
    pub sample_title: String,

    /// Chemical elements present in the sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<String>>,
}
