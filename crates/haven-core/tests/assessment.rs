use haven_core::error::CoreError;
use haven_core::models::answer::{
    Age, Choice, Duration, FieldValue, Frequency, FunctionalImpact, OrdinalLabel,
};
use haven_core::models::assessment::{AssessmentState, CompletionReason};
use haven_core::models::phase::Phase;
use haven_core::models::question::TargetField;

#[test]
fn new_state_starts_at_first_question() {
    let state = AssessmentState::new();
    assert_eq!(state.current_phase, Phase::Age);
    assert_eq!(state.progress(), 0);
    assert!(!state.is_complete());
    assert_eq!(state.data.answered_count(), 0);
}

#[test]
fn progress_counts_answered_fields() {
    let mut state = AssessmentState::new();
    state
        .record(TargetField::Age, FieldValue::Age(Age::Years(14)))
        .unwrap();
    assert_eq!(state.progress(), 14);

    state
        .record(
            TargetField::Duration,
            FieldValue::Duration(Choice::Matched(Duration::OneToThreeMonths)),
        )
        .unwrap();
    assert_eq!(state.progress(), 29);
}

#[test]
fn record_rejects_value_for_other_field() {
    let mut state = AssessmentState::new();
    let err = state
        .record(TargetField::Age, FieldValue::Duration(Choice::Verbatim("ages".into())))
        .unwrap_err();
    assert!(matches!(err, CoreError::FieldMismatch { .. }));
    assert!(state.data.age.is_none());
    assert!(state.data.duration.is_none());
}

#[test]
fn completed_state_rejects_further_answers() {
    let mut state = AssessmentState::new();
    state.complete(CompletionReason::CrisisDetected, "closing".into());

    assert_eq!(state.current_phase, Phase::Completion);
    let err = state
        .record(TargetField::Age, FieldValue::Age(Age::Years(9)))
        .unwrap_err();
    assert!(matches!(err, CoreError::AlreadyComplete));
    assert!(state.data.age.is_none());
}

#[test]
fn labels_parse_case_insensitively() {
    assert_eq!(
        Frequency::from_label(" Nearly_Every_Day "),
        Some(Frequency::NearlyEveryDay)
    );
    assert_eq!(
        FunctionalImpact::from_label("very_much"),
        Some(FunctionalImpact::VeryMuch)
    );
    assert_eq!(Frequency::from_label("always"), None);
}

#[test]
fn serialized_labels_match_vocabulary() {
    for duration in Duration::ALL {
        let json = serde_json::to_string(duration).unwrap();
        assert_eq!(json, format!("\"{}\"", duration.label()));
    }
    for frequency in Frequency::ALL {
        let json = serde_json::to_string(frequency).unwrap();
        assert_eq!(json, format!("\"{}\"", frequency.label()));
    }
}
