use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::phase::Phase;

/// One line of the intake transcript.
///
/// Kept for audit and progress display. The engine appends to the log but
/// never reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversationHistoryEntry {
    pub role: HistoryRole,
    pub text: String,
    /// The question this entry asked or answered, if any.
    pub question: Option<Phase>,
    pub timestamp: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HistoryRole {
    User,
    System,
}

impl ConversationHistoryEntry {
    pub fn user(text: impl Into<String>, question: Option<Phase>) -> Self {
        Self {
            role: HistoryRole::User,
            text: text.into(),
            question,
            timestamp: jiff::Timestamp::now(),
        }
    }

    pub fn system(text: impl Into<String>, question: Option<Phase>) -> Self {
        Self {
            role: HistoryRole::System,
            text: text.into(),
            question,
            timestamp: jiff::Timestamp::now(),
        }
    }
}
