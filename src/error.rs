use crate::models::HandlerResponse;

/// Everything that can go wrong while extracting and republishing an archive.
///
/// Known causes are converted where they are detected; anything else rides
/// [ExtractError::Unhandled] to the outer boundary in the handler.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The notification carried no records.
    #[error("No records found in event")]
    MalformedNotification,

    /// The source object does not exist.
    #[error("File not found: {key}")]
    SourceNotFound { key: String },

    /// The source object was not a gzip stream of utf-8 text.
    #[error("Invalid archive format: {0}")]
    InvalidArchive(#[from] std::io::Error),

    /// The decompressed content was not valid JSON.
    #[error("Invalid JSON format: {0}")]
    InvalidPayloadFormat(#[from] serde_json::Error),

    /// Catch-all for fetch transport failures, publish failures, and anything
    /// unexpected.
    #[error("Error processing request: {0}")]
    Unhandled(anyhow::Error),
}

impl From<anyhow::Error> for ExtractError {
    fn from(err: anyhow::Error) -> Self {
        ExtractError::Unhandled(err)
    }
}

impl ExtractError {
    pub fn status_code(&self) -> u16 {
        match self {
            ExtractError::MalformedNotification => 400,
            ExtractError::SourceNotFound { .. } => 404,
            ExtractError::InvalidArchive(_) => 400,
            ExtractError::InvalidPayloadFormat(_) => 400,
            ExtractError::Unhandled(_) => 500,
        }
    }

    /// The outcome record reported to the invoking platform for this error.
    pub fn into_response(self) -> HandlerResponse {
        HandlerResponse {
            status_code: self.status_code(),
            body: self.to_string(),
            url: None,
        }
    }
}
