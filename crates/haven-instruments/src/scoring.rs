//! Subscale scoring, severity banding, and the suitability recommendation.
//!
//! The band boundaries and suitability triggers are intake policy, not
//! validated cut-points of the full instruments. They live in
//! [`ScoringPolicy`] so a deployment can state its own.

use haven_core::models::answer::{Duration, Frequency, FunctionalImpact};
use haven_core::models::assessment::{AssessmentData, Severity, Suitability};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::instruments::{gad7::Gad7, phq_a::PhqA};
use crate::Instrument;

/// Inclusive range of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A single instrument item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub range: ScoreRange,
}

pub(crate) fn item(id: &str, name: &str) -> ItemDefinition {
    ItemDefinition {
        id: id.to_string(),
        name: name.to_string(),
        range: ScoreRange { min: 0, max: 3 },
    }
}

/// Points for one item response. Unreported symptoms score the same as
/// reported absence.
pub fn frequency_score(frequency: Frequency) -> u8 {
    match frequency {
        Frequency::NotReported | Frequency::NotAtAll => 0,
        Frequency::SeveralDays => 1,
        Frequency::MoreThanHalfTheDays => 2,
        Frequency::NearlyEveryDay => 3,
    }
}

/// Thresholds applied when an assessment completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScoringPolicy {
    /// Combined score at or above which severity is `Severe`.
    pub severe_from: u8,
    pub moderate_from: u8,
    pub mild_from: u8,
    /// Either subscale at or above this makes the child suitable.
    pub subscale_suitable_from: u8,
    pub suitable_impacts: Vec<FunctionalImpact>,
    pub suitable_durations: Vec<Duration>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            severe_from: 20,
            moderate_from: 10,
            mild_from: 5,
            subscale_suitable_from: 10,
            suitable_impacts: vec![FunctionalImpact::VeryMuch, FunctionalImpact::Extremely],
            suitable_durations: vec![Duration::OneToThreeMonths, Duration::MoreThanThreeMonths],
        }
    }
}

/// Derived results for a completed assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreCard {
    pub phq_score: u8,
    pub gad_score: u8,
    pub severity: Severity,
    pub suitability: Suitability,
}

/// PHQ-A subscale total, 0–27.
pub fn score_phq(data: &AssessmentData) -> u8 {
    PhqA.score(&data.depression.unwrap_or_default().all())
}

/// GAD-7 subscale total, 0–21.
pub fn score_gad(data: &AssessmentData) -> u8 {
    Gad7.score(&data.anxiety.unwrap_or_default().all())
}

/// Band the larger of the two subscale totals.
pub fn severity(phq: u8, gad: u8, policy: &ScoringPolicy) -> Severity {
    let combined = phq.max(gad);
    if combined >= policy.severe_from {
        Severity::Severe
    } else if combined >= policy.moderate_from {
        Severity::Moderate
    } else if combined >= policy.mild_from {
        Severity::Mild
    } else {
        Severity::Minimal
    }
}

pub fn suitability(data: &AssessmentData, severity: Severity, policy: &ScoringPolicy) -> Suitability {
    if data.crisis_detected || data.crisis_flag() {
        return Suitability::Crisis;
    }

    let phq = score_phq(data);
    let gad = score_gad(data);
    let elevated_score =
        phq >= policy.subscale_suitable_from || gad >= policy.subscale_suitable_from;
    let elevated_severity = matches!(severity, Severity::Moderate | Severity::Severe);
    let high_impact = data
        .functional_impact
        .as_ref()
        .and_then(|c| c.matched())
        .is_some_and(|impact| policy.suitable_impacts.contains(&impact));
    let persistent = data
        .duration
        .as_ref()
        .and_then(|c| c.matched())
        .is_some_and(|duration| policy.suitable_durations.contains(&duration));

    if elevated_score || elevated_severity || high_impact || persistent {
        Suitability::Suitable
    } else {
        Suitability::NotSuitable
    }
}

/// Score an assessment end to end.
pub fn score_assessment(data: &AssessmentData, policy: &ScoringPolicy) -> ScoreCard {
    let phq_score = score_phq(data);
    let gad_score = score_gad(data);
    let severity = severity(phq_score, gad_score, policy);
    let suitability = suitability(data, severity, policy);
    ScoreCard {
        phq_score,
        gad_score,
        severity,
        suitability,
    }
}
