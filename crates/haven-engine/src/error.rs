use haven_bedrock::error::GenerationError;
use haven_core::error::CoreError;
use haven_core::models::phase::Phase;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("generation service failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("no answer given for {phase}")]
    NoAnswer { phase: Phase },

    #[error("question {phase} has no extraction rule for its target field")]
    UnsupportedStrategy { phase: Phase },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("assessment state error: {0}")]
    State(#[from] CoreError),
}
