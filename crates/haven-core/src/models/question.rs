use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::phase::Phase;

/// The assessment field a question writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TargetField {
    Age,
    Concerns,
    Depression,
    Anxiety,
    FunctionalImpact,
    Duration,
    Crisis,
}

/// A scripted intake question. Statically defined; never constructed at
/// runtime.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub phase: Phase,
    /// 1-based position in the script.
    pub ordinal: u8,
    /// Shown to the parent verbatim.
    pub prompt: &'static str,
    pub target_field: TargetField,
    /// A blank answer to a required question is rejected and re-asked.
    pub required: bool,
    /// An affirmative answer ends the assessment as a crisis.
    pub critical: bool,
    pub strategy: ExtractionStrategy,
}

/// How a free-text answer becomes a structured value.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Deterministic matching against the raw text.
    Pattern(PatternKind),
    /// A generation call under a strict output schema, with a deterministic
    /// fallback when the reply cannot be used.
    ModelAssisted(ModelSchema),
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum PatternKind {
    /// First integer literal in the text.
    Integer,
    /// One of a closed set of options, matched by phrase.
    Choice(&'static [ChoiceOption]),
    /// Affirmative or negative tokens.
    YesNo,
}

/// A multiple-choice option: the stored label and the phrases that select it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub phrases: &'static [&'static str],
}

/// Output contracts for model-assisted extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSchema {
    /// `{"summary": string, "issues": [string]}`
    Concerns,
    /// One frequency label per depression sub-item.
    DepressionItems,
    /// One frequency label per anxiety sub-item.
    AnxietyItems,
    /// `{"crisis": bool, "indicators": [string]}`
    Crisis,
}

impl Question {
    pub fn is_model_assisted(&self) -> bool {
        matches!(self.strategy, ExtractionStrategy::ModelAssisted(_))
    }
}
