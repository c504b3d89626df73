use thiserror::Error;

/// Renderer failure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A required field was absent or empty on the record.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// PDF serialization failed.
    #[error("pdf generation error: {0}")]
    Pdf(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
