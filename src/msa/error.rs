/// Errors that can occur while reading an msa file
#[derive(Debug, thiserror::Error)]
pub enum MsaError {
    /// I/O error reading the msa file
    #[error("Failed to read msa file: {0}")]
    IoError(#[from] std::io::Error),
}
