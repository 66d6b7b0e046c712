use crate::msa::MsaError;

/// Errors that abort the conversion of one record
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// I/O error reading an input file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The JSON record could not be parsed
    #[error("Invalid JSON record: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The JSON record has an unusable overall shape
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    /// A required field is absent (or JSON null)
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field is present but holds an unusable value
    #[error("Invalid value in field {field}: {message}")]
    InvalidField {
        /// Name of the offending field
        field: String,
        /// What was wrong with the value
        message: String,
    },

    /// The publish timestamp does not match `YYYY-MM-DD HH:MM:SS`
    #[error("Cannot parse timestamp in field {field}: {source}")]
    Timestamp {
        /// Name of the offending field
        field: String,
        /// Underlying chrono parse error
        #[source]
        source: chrono::ParseError,
    },

    /// The companion msa file could not be read
    #[error(transparent)]
    MsaError(#[from] MsaError),
}
