use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One step of the intake. The seven question phases run in declaration
/// order; `Completion` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Age,
    InitialConcerns,
    DepressionSymptoms,
    AnxietySymptoms,
    FunctionalImpact,
    Duration,
    CrisisScreen,
    Completion,
}

impl Phase {
    /// The question phases in the order they are asked.
    pub const QUESTIONS: [Phase; 7] = [
        Phase::Age,
        Phase::InitialConcerns,
        Phase::DepressionSymptoms,
        Phase::AnxietySymptoms,
        Phase::FunctionalImpact,
        Phase::Duration,
        Phase::CrisisScreen,
    ];

    pub fn is_terminal(self) -> bool {
        self == Phase::Completion
    }

    /// Stable snake_case identifier, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Age => "age",
            Phase::InitialConcerns => "initial_concerns",
            Phase::DepressionSymptoms => "depression_symptoms",
            Phase::AnxietySymptoms => "anxiety_symptoms",
            Phase::FunctionalImpact => "functional_impact",
            Phase::Duration => "duration",
            Phase::CrisisScreen => "crisis_screen",
            Phase::Completion => "completion",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
