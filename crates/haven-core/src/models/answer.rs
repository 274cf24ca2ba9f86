//! Structured values extracted from free-text answers.
//!
//! Every ordinal scale has a fixed snake_case label vocabulary. The same
//! labels appear in serialized snapshots and in the output contracts given
//! to the generation service, so a label is only ever parsed through
//! [`OrdinalLabel::from_label`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::TargetField;

/// A closed ordinal scale with stable string labels.
pub trait OrdinalLabel: Sized + Copy + 'static {
    /// Every value, lowest first.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        Self::ALL.iter().copied().find(|v| v.label() == wanted)
    }

    /// Labels joined for inclusion in a prompt, e.g. `"a" | "b"`.
    fn vocabulary() -> String {
        Self::ALL
            .iter()
            .map(|v| format!("\"{}\"", v.label()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// How often a symptom was present over the last two weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    /// The parent's answer did not mention this symptom.
    #[default]
    NotReported,
    NotAtAll,
    SeveralDays,
    MoreThanHalfTheDays,
    NearlyEveryDay,
}

impl OrdinalLabel for Frequency {
    const ALL: &'static [Self] = &[
        Frequency::NotReported,
        Frequency::NotAtAll,
        Frequency::SeveralDays,
        Frequency::MoreThanHalfTheDays,
        Frequency::NearlyEveryDay,
    ];

    fn label(self) -> &'static str {
        match self {
            Frequency::NotReported => "not_reported",
            Frequency::NotAtAll => "not_at_all",
            Frequency::SeveralDays => "several_days",
            Frequency::MoreThanHalfTheDays => "more_than_half_the_days",
            Frequency::NearlyEveryDay => "nearly_every_day",
        }
    }
}

/// How much the difficulties interfere with daily life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FunctionalImpact {
    NotAtAll,
    ALittle,
    Somewhat,
    VeryMuch,
    Extremely,
}

impl OrdinalLabel for FunctionalImpact {
    const ALL: &'static [Self] = &[
        FunctionalImpact::NotAtAll,
        FunctionalImpact::ALittle,
        FunctionalImpact::Somewhat,
        FunctionalImpact::VeryMuch,
        FunctionalImpact::Extremely,
    ];

    fn label(self) -> &'static str {
        match self {
            FunctionalImpact::NotAtAll => "not_at_all",
            FunctionalImpact::ALittle => "a_little",
            FunctionalImpact::Somewhat => "somewhat",
            FunctionalImpact::VeryMuch => "very_much",
            FunctionalImpact::Extremely => "extremely",
        }
    }
}

/// How long the difficulties have been going on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Duration {
    #[serde(rename = "less_than_2_weeks")]
    LessThanTwoWeeks,
    #[serde(rename = "2_4_weeks")]
    TwoToFourWeeks,
    #[serde(rename = "1_3_months")]
    OneToThreeMonths,
    #[serde(rename = "more_than_3_months")]
    MoreThanThreeMonths,
}

impl OrdinalLabel for Duration {
    const ALL: &'static [Self] = &[
        Duration::LessThanTwoWeeks,
        Duration::TwoToFourWeeks,
        Duration::OneToThreeMonths,
        Duration::MoreThanThreeMonths,
    ];

    fn label(self) -> &'static str {
        match self {
            Duration::LessThanTwoWeeks => "less_than_2_weeks",
            Duration::TwoToFourWeeks => "2_4_weeks",
            Duration::OneToThreeMonths => "1_3_months",
            Duration::MoreThanThreeMonths => "more_than_3_months",
        }
    }
}

/// A multiple-choice answer. When no option matched, the parent's words are
/// kept verbatim for a human reviewer instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Choice<T> {
    Matched(T),
    Verbatim(String),
}

impl<T: Copy> Choice<T> {
    pub fn matched(&self) -> Option<T> {
        match self {
            Choice::Matched(v) => Some(*v),
            Choice::Verbatim(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Age {
    Years(u8),
    /// No integer could be read from the answer.
    Unparsed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Concerns {
    pub summary: String,
    pub issues: Vec<String>,
}

/// PHQ-A items covered by the intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DepressionItems {
    /// Little interest or pleasure in doing things.
    pub interest: Frequency,
    /// Feeling down, depressed, irritable, or hopeless.
    pub mood: Frequency,
    /// Trouble falling or staying asleep, or sleeping too much.
    pub sleep: Frequency,
    /// Poor appetite, weight loss, or overeating.
    pub appetite: Frequency,
}

impl DepressionItems {
    pub fn all(self) -> [Frequency; 4] {
        [self.interest, self.mood, self.sleep, self.appetite]
    }
}

/// GAD-7 items covered by the intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnxietyItems {
    /// Feeling nervous, anxious, or on edge.
    pub nervousness: Frequency,
    /// Not being able to stop or control worrying.
    pub worry: Frequency,
    /// Trouble relaxing.
    pub restlessness: Frequency,
}

impl AnxietyItems {
    pub fn all(self) -> [Frequency; 3] {
        [self.nervousness, self.worry, self.restlessness]
    }
}

/// Result of matching a yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
    Unclear,
}

/// Answer to the crisis screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrisisScreen {
    pub flag: bool,
    /// Short descriptions of what was disclosed, when any.
    pub indicators: Vec<String>,
    /// The raw answer, kept when it could not be read as yes or no.
    pub verbatim: Option<String>,
}

/// A structured value for exactly one target field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldValue {
    Age(Age),
    Concerns(Concerns),
    Depression(DepressionItems),
    Anxiety(AnxietyItems),
    FunctionalImpact(Choice<FunctionalImpact>),
    Duration(Choice<Duration>),
    Crisis(CrisisScreen),
}

impl FieldValue {
    pub fn target(&self) -> TargetField {
        match self {
            FieldValue::Age(_) => TargetField::Age,
            FieldValue::Concerns(_) => TargetField::Concerns,
            FieldValue::Depression(_) => TargetField::Depression,
            FieldValue::Anxiety(_) => TargetField::Anxiety,
            FieldValue::FunctionalImpact(_) => TargetField::FunctionalImpact,
            FieldValue::Duration(_) => TargetField::Duration,
            FieldValue::Crisis(_) => TargetField::Crisis,
        }
    }

    /// True when this is an affirmative crisis-screen answer.
    pub fn is_affirmative_crisis(&self) -> bool {
        matches!(self, FieldValue::Crisis(screen) if screen.flag)
    }
}
