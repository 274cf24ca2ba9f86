use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("AWS config error: {0}")]
    Config(String),
}

impl GenerationError {
    /// True when the service could not be reached or refused the call, as
    /// opposed to answering with something unusable.
    pub fn is_transport(&self) -> bool {
        matches!(self, GenerationError::Invocation(_) | GenerationError::Config(_))
    }
}
