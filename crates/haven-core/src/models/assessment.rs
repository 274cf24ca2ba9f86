use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::{
    Age, AnxietyItems, Choice, Concerns, CrisisScreen, DepressionItems, Duration, FieldValue,
    FunctionalImpact,
};
use super::phase::Phase;
use super::question::TargetField;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

/// Recommendation for onward care matching. Not a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Suitability {
    Crisis,
    Suitable,
    NotSuitable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompletionReason {
    AllAnswered,
    CrisisDetected,
}

/// Everything collected and derived for one assessment.
///
/// A field is `None` until its question has been answered. Derived fields
/// are filled when the assessment completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentData {
    pub age: Option<Age>,
    pub concerns: Option<Concerns>,
    pub depression: Option<DepressionItems>,
    pub anxiety: Option<AnxietyItems>,
    pub functional_impact: Option<Choice<FunctionalImpact>>,
    pub duration: Option<Choice<Duration>>,
    pub crisis: Option<CrisisScreen>,

    pub phq_score: Option<u8>,
    pub gad_score: Option<u8>,
    pub severity: Option<Severity>,
    pub suitability: Option<Suitability>,

    pub crisis_detected: bool,
    /// What triggered the crisis: matched phrases or the screen's indicators.
    #[serde(default)]
    pub crisis_indicators: Vec<String>,
    pub completed: bool,
    pub completion_reason: Option<CompletionReason>,
}

impl AssessmentData {
    /// Number of question fields holding an answer.
    pub fn answered_count(&self) -> usize {
        [
            self.age.is_some(),
            self.concerns.is_some(),
            self.depression.is_some(),
            self.anxiety.is_some(),
            self.functional_impact.is_some(),
            self.duration.is_some(),
            self.crisis.is_some(),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count()
    }

    fn store(&mut self, value: FieldValue) {
        match value {
            FieldValue::Age(v) => self.age = Some(v),
            FieldValue::Concerns(v) => self.concerns = Some(v),
            FieldValue::Depression(v) => self.depression = Some(v),
            FieldValue::Anxiety(v) => self.anxiety = Some(v),
            FieldValue::FunctionalImpact(v) => self.functional_impact = Some(v),
            FieldValue::Duration(v) => self.duration = Some(v),
            FieldValue::Crisis(v) => self.crisis = Some(v),
        }
    }

    /// True when the crisis screen was answered affirmatively.
    pub fn crisis_flag(&self) -> bool {
        self.crisis.as_ref().is_some_and(|c| c.flag)
    }
}

/// Mutable state of one conversation's assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentState {
    pub id: Uuid,
    pub current_phase: Phase,
    pub data: AssessmentData,
    /// The reply given when the assessment completed, repeated for any
    /// later turn.
    pub closing_message: Option<String>,
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            current_phase: Phase::QUESTIONS[0],
            data: AssessmentData::default(),
            closing_message: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.data.completed
    }

    /// Store an answer for the current phase.
    ///
    /// Rejected once the assessment is complete, and when the value belongs
    /// to a different question than the one pending.
    pub fn record(&mut self, expected: TargetField, value: FieldValue) -> Result<(), CoreError> {
        if self.is_complete() {
            return Err(CoreError::AlreadyComplete);
        }
        if value.target() != expected {
            return Err(CoreError::FieldMismatch {
                expected: self.current_phase,
                got: value.target(),
            });
        }
        self.data.store(value);
        Ok(())
    }

    /// Mark the assessment finished. After this no field changes.
    pub fn complete(&mut self, reason: CompletionReason, closing_message: String) {
        self.current_phase = Phase::Completion;
        self.data.completed = true;
        self.data.completion_reason = Some(reason);
        self.closing_message = Some(closing_message);
    }

    /// Progress as a whole percentage, from answered fields rather than
    /// turns taken.
    pub fn progress(&self) -> u8 {
        let total = Phase::QUESTIONS.len();
        let answered = self.data.answered_count().min(total);
        ((answered * 100 + total / 2) / total) as u8
    }
}
