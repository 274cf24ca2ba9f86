use haven_bedrock::error::GenerationError;
use haven_bedrock::generate::{GenerationOptions, MessageRole};
use haven_core::models::answer::{DepressionItems, FieldValue, Frequency};
use haven_core::models::phase::Phase;
use haven_core::models::question::ModelSchema;
use haven_engine::extract::model::{build_request, fallback, parse, parse_or_fallback};
use haven_engine::sequencer;

#[test]
fn request_carries_contract_and_answer() {
    let question = sequencer::current_question(Phase::DepressionSymptoms).unwrap();
    let request = build_request(
        ModelSchema::DepressionItems,
        question,
        "  barely sleeps  ",
        GenerationOptions::default(),
    );

    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, MessageRole::System);
    let system = &request.messages[0].content;
    for key in ["interest", "mood", "sleep", "appetite", "nearly_every_day"] {
        assert!(system.contains(key), "contract missing {key}");
    }
    assert!(request.messages[1].content.contains("<answer>\nbarely sleeps\n</answer>"));
    assert_eq!(request.options.temperature, 0.0);
}

#[test]
fn unknown_item_labels_become_not_reported() {
    let reply = r#"{"interest": "several_days", "mood": "always", "sleep": "Nearly_Every_Day"}"#;
    let value = parse(ModelSchema::DepressionItems, reply).unwrap();
    assert_eq!(
        value,
        FieldValue::Depression(DepressionItems {
            interest: Frequency::SeveralDays,
            mood: Frequency::NotReported,
            sleep: Frequency::NearlyEveryDay,
            appetite: Frequency::NotReported,
        })
    );
}

#[test]
fn empty_summary_is_a_schema_violation() {
    let err = parse(ModelSchema::Concerns, r#"{"summary": "  ", "issues": []}"#).unwrap_err();
    assert!(matches!(err, GenerationError::SchemaViolation(_)));
}

#[test]
fn crisis_reply_must_have_a_boolean() {
    let err = parse(ModelSchema::Crisis, r#"{"crisis": "maybe"}"#).unwrap_err();
    assert!(matches!(err, GenerationError::SchemaViolation(_)));
}

#[test]
fn unreadable_reply_uses_fallback() {
    let value = parse_or_fallback(ModelSchema::Crisis, "no idea", "yes");
    assert_eq!(value, fallback(ModelSchema::Crisis, "yes"));
    assert!(matches!(value, FieldValue::Crisis(screen) if screen.flag));

    let value = parse_or_fallback(ModelSchema::AnxietyItems, "", "worried");
    assert_eq!(value, fallback(ModelSchema::AnxietyItems, "worried"));
}
