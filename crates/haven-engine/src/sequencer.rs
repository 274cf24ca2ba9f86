//! The intake script and its phase transitions.
//!
//! Seven questions, asked once each in a fixed order. The table is static;
//! [`current_question`] and [`advance`] are total over [`Phase`].

use haven_core::models::phase::Phase;
use haven_core::models::question::{
    ChoiceOption, ExtractionStrategy, ModelSchema, PatternKind, Question, TargetField,
};

const IMPACT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        label: "not_at_all",
        phrases: &["not at all", "not really", "no impact", "no effect", "doing fine"],
    },
    ChoiceOption {
        label: "a_little",
        phrases: &["a little", "a bit", "slightly", "mildly", "a little bit"],
    },
    ChoiceOption {
        label: "somewhat",
        phrases: &["somewhat", "moderately", "some days", "to some extent"],
    },
    ChoiceOption {
        label: "very_much",
        phrases: &["very much", "a lot", "quite a lot", "significantly", "really affecting"],
    },
    ChoiceOption {
        label: "extremely",
        phrases: &["extremely", "severely", "completely", "can't function", "cannot function"],
    },
];

const DURATION_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        label: "less_than_2_weeks",
        phrases: &[
            "less than 2 weeks",
            "less than two weeks",
            "a few days",
            "a week",
            "one week",
            "1 week",
        ],
    },
    ChoiceOption {
        label: "2_4_weeks",
        phrases: &[
            "2-4 weeks",
            "2 to 4 weeks",
            "two to four weeks",
            "a few weeks",
            "couple of weeks",
            "three weeks",
            "a month",
            "one month",
        ],
    },
    ChoiceOption {
        label: "1_3_months",
        phrases: &[
            "1-3 months",
            "1 to 3 months",
            "one to three months",
            "a couple of months",
            "two months",
            "2 months",
            "few months",
        ],
    },
    ChoiceOption {
        label: "more_than_3_months",
        phrases: &[
            "more than 3 months",
            "more than three months",
            "over 3 months",
            "over three months",
            "4 months",
            "6 months",
            "six months",
            "half a year",
            "a year",
            "years",
            "long time",
        ],
    },
];

static QUESTIONS: [Question; 7] = [
    Question {
        phase: Phase::Age,
        ordinal: 1,
        prompt: "To get started, how old is your child?",
        target_field: TargetField::Age,
        required: true,
        critical: false,
        strategy: ExtractionStrategy::Pattern(PatternKind::Integer),
    },
    Question {
        phase: Phase::InitialConcerns,
        ordinal: 2,
        prompt: "What concerns bring you here today? In your own words, what has been going on with your child?",
        target_field: TargetField::Concerns,
        required: true,
        critical: false,
        strategy: ExtractionStrategy::ModelAssisted(ModelSchema::Concerns),
    },
    Question {
        phase: Phase::DepressionSymptoms,
        ordinal: 3,
        prompt: "Over the last two weeks, how often has your child shown little interest or pleasure in doing things, seemed down or hopeless, had trouble sleeping, or had changes in appetite?",
        target_field: TargetField::Depression,
        required: true,
        critical: false,
        strategy: ExtractionStrategy::ModelAssisted(ModelSchema::DepressionItems),
    },
    Question {
        phase: Phase::AnxietySymptoms,
        ordinal: 4,
        prompt: "Over the last two weeks, how often has your child seemed nervous or on edge, been unable to stop worrying, or had trouble relaxing?",
        target_field: TargetField::Anxiety,
        required: true,
        critical: false,
        strategy: ExtractionStrategy::ModelAssisted(ModelSchema::AnxietyItems),
    },
    Question {
        phase: Phase::FunctionalImpact,
        ordinal: 5,
        prompt: "How much are these difficulties affecting your child's daily life at home, at school, or with friends: not at all, a little, somewhat, very much, or extremely?",
        target_field: TargetField::FunctionalImpact,
        required: true,
        critical: false,
        strategy: ExtractionStrategy::Pattern(PatternKind::Choice(IMPACT_OPTIONS)),
    },
    Question {
        phase: Phase::Duration,
        ordinal: 6,
        prompt: "How long has this been going on: less than 2 weeks, 2-4 weeks, 1-3 months, or more than 3 months?",
        target_field: TargetField::Duration,
        required: true,
        critical: false,
        strategy: ExtractionStrategy::Pattern(PatternKind::Choice(DURATION_OPTIONS)),
    },
    Question {
        phase: Phase::CrisisScreen,
        ordinal: 7,
        prompt: "Has your child talked about or shown any signs of wanting to hurt themselves or someone else, or of not wanting to be alive?",
        target_field: TargetField::Crisis,
        required: true,
        critical: true,
        strategy: ExtractionStrategy::ModelAssisted(ModelSchema::Crisis),
    },
];

/// The full script in asking order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// The question pending in `phase`, or `None` once the intake is complete.
pub fn current_question(phase: Phase) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.phase == phase)
}

/// The phase after `phase`. `Completion` follows the last question and
/// is its own successor.
pub fn advance(phase: Phase) -> Phase {
    let position = Phase::QUESTIONS.iter().position(|p| *p == phase);
    match position {
        Some(i) => Phase::QUESTIONS
            .get(i + 1)
            .copied()
            .unwrap_or(Phase::Completion),
        None => Phase::Completion,
    }
}

/// 1-based position of `phase` in the script.
pub fn ordinal(phase: Phase) -> Option<u8> {
    current_question(phase).map(|q| q.ordinal)
}
