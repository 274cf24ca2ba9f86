//! Free-text answer to structured field value.
//!
//! [`ResponseExtractor::extract`] dispatches on the question's
//! [`ExtractionStrategy`]. Pattern questions never leave the process;
//! model-assisted questions make exactly one generation call. Extraction
//! never touches assessment state.

pub mod model;
pub mod pattern;

use std::sync::Arc;

use haven_bedrock::generate::{GenerationOptions, TextGenerator};
use haven_core::models::answer::FieldValue;
use haven_core::models::question::{ExtractionStrategy, PatternKind, Question, TargetField};
use tracing::{info, warn};

use crate::config::ServiceFailurePolicy;
use crate::error::ExtractionError;

pub struct ResponseExtractor {
    generator: Arc<dyn TextGenerator>,
    options: GenerationOptions,
    service_failure: ServiceFailurePolicy,
}

impl ResponseExtractor {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        options: GenerationOptions,
        service_failure: ServiceFailurePolicy,
    ) -> Self {
        Self {
            generator,
            options,
            service_failure,
        }
    }

    /// Extract a value for `question` from the parent's answer.
    ///
    /// A blank answer to a required question is rejected. Unusable model
    /// replies degrade to the schema's fallback. A failed call to the
    /// generation service is returned as an error unless the extractor was
    /// configured to fall back.
    pub async fn extract(&self, raw: &str, question: &Question) -> Result<FieldValue, ExtractionError> {
        if question.required && raw.trim().is_empty() {
            return Err(ExtractionError::NoAnswer {
                phase: question.phase,
            });
        }

        match question.strategy {
            ExtractionStrategy::Pattern(kind) => extract_pattern(raw, question, kind),
            ExtractionStrategy::ModelAssisted(schema) => {
                let request = model::build_request(schema, question, raw, self.options);
                info!(
                    phase = %question.phase,
                    model_id = self.generator.model_id(),
                    "requesting model-assisted extraction"
                );
                match self.generator.generate(&request).await {
                    Ok(reply) => Ok(model::parse_or_fallback(schema, &reply, raw)),
                    Err(e) if e.is_transport() && self.service_failure == ServiceFailurePolicy::Fail => {
                        warn!(phase = %question.phase, error = %e, "generation service failed");
                        Err(ExtractionError::Generation(e))
                    }
                    Err(e) => {
                        warn!(phase = %question.phase, error = %e, "generation failed, using fallback");
                        Ok(model::fallback(schema, raw))
                    }
                }
            }
        }
    }

    /// Extract without calling the generation service: pattern questions
    /// only, `None` for model-assisted ones.
    pub fn extract_offline(&self, raw: &str, question: &Question) -> Option<FieldValue> {
        match question.strategy {
            ExtractionStrategy::Pattern(kind) => extract_pattern(raw, question, kind).ok(),
            ExtractionStrategy::ModelAssisted(_) => None,
        }
    }

    /// The value used when the generation service is unavailable: the
    /// schema fallback for model-assisted questions, the pattern value
    /// otherwise.
    pub fn extract_fallback(&self, raw: &str, question: &Question) -> Option<FieldValue> {
        match question.strategy {
            ExtractionStrategy::Pattern(kind) => extract_pattern(raw, question, kind).ok(),
            ExtractionStrategy::ModelAssisted(schema) => Some(model::fallback(schema, raw)),
        }
    }
}

fn extract_pattern(
    raw: &str,
    question: &Question,
    kind: PatternKind,
) -> Result<FieldValue, ExtractionError> {
    let value = match (kind, question.target_field) {
        (PatternKind::Integer, TargetField::Age) => FieldValue::Age(pattern::extract_age(raw)),
        (PatternKind::Choice(options), TargetField::FunctionalImpact) => {
            FieldValue::FunctionalImpact(pattern::match_choice(raw, options))
        }
        (PatternKind::Choice(options), TargetField::Duration) => {
            FieldValue::Duration(pattern::match_choice(raw, options))
        }
        (PatternKind::YesNo, TargetField::Crisis) => FieldValue::Crisis(pattern::crisis_screen(raw)),
        _ => {
            return Err(ExtractionError::UnsupportedStrategy {
                phase: question.phase,
            });
        }
    };
    Ok(value)
}
