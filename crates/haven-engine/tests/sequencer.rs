use haven_core::models::phase::Phase;
use haven_core::models::question::TargetField;
use haven_engine::sequencer::{advance, current_question, ordinal, questions};

#[test]
fn seven_questions_in_phase_order() {
    let phases: Vec<Phase> = questions().iter().map(|q| q.phase).collect();
    assert_eq!(phases, Phase::QUESTIONS.to_vec());
    for (i, question) in questions().iter().enumerate() {
        assert_eq!(usize::from(question.ordinal), i + 1);
        assert!(question.required);
    }
}

#[test]
fn only_the_crisis_screen_is_critical() {
    let critical: Vec<TargetField> = questions()
        .iter()
        .filter(|q| q.critical)
        .map(|q| q.target_field)
        .collect();
    assert_eq!(critical, vec![TargetField::Crisis]);
}

#[test]
fn advance_walks_to_completion_and_stays() {
    let mut phase = Phase::Age;
    let mut steps = 0;
    while phase != Phase::Completion {
        phase = advance(phase);
        steps += 1;
    }
    assert_eq!(steps, 7);
    assert_eq!(advance(Phase::Completion), Phase::Completion);
}

#[test]
fn completion_has_no_question() {
    assert!(current_question(Phase::Completion).is_none());
    assert_eq!(ordinal(Phase::Completion), None);
    assert_eq!(ordinal(Phase::Duration), Some(6));
}

#[test]
fn model_assisted_questions() {
    let assisted: Vec<Phase> = questions()
        .iter()
        .filter(|q| q.is_model_assisted())
        .map(|q| q.phase)
        .collect();
    assert_eq!(
        assisted,
        vec![
            Phase::InitialConcerns,
            Phase::DepressionSymptoms,
            Phase::AnxietySymptoms,
            Phase::CrisisScreen,
        ]
    );
}
