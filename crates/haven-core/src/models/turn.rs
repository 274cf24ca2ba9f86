use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::{AssessmentData, AssessmentState};
use super::phase::Phase;

/// What the chat layer receives after each processed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TurnResponse {
    pub message: String,
    pub assessment: AssessmentData,
    pub current_phase: Phase,
    /// Answered questions as a percentage, 0–100.
    pub progress: u8,
    pub is_complete: bool,
    pub crisis_detected: bool,
}

impl TurnResponse {
    pub fn from_state(state: &AssessmentState, message: String) -> Self {
        Self {
            message,
            assessment: state.data.clone(),
            current_phase: state.current_phase,
            progress: state.progress(),
            is_complete: state.is_complete(),
            crisis_detected: state.data.crisis_detected,
        }
    }
}

/// Point-in-time view of an assessment, for progress display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub assessment: AssessmentData,
    pub progress: u8,
    pub current_phase: Phase,
}

impl From<&AssessmentState> for AssessmentSummary {
    fn from(state: &AssessmentState) -> Self {
        Self {
            assessment: state.data.clone(),
            progress: state.progress(),
            current_phase: state.current_phase,
        }
    }
}
