/// Errors that can occur when serializing record sections
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
