/// Errors from reading an extraction source.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The input document could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}
