use haven_bedrock::error::GenerationError;
use haven_bedrock::parse::{extract_json_object, parse_reply};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Screen {
    crisis: bool,
    indicators: Vec<String>,
}

#[test]
fn bare_object_is_found() {
    let reply = r#"{"crisis": false, "indicators": []}"#;
    assert_eq!(extract_json_object(reply), Some(reply));
}

#[test]
fn fenced_object_is_found() {
    let reply = "Here you go:\n```json\n{\"crisis\": true, \"indicators\": [\"cutting\"]}\n```\nThanks";
    let screen: Screen = parse_reply(reply).unwrap();
    assert!(screen.crisis);
    assert_eq!(screen.indicators, vec!["cutting".to_string()]);
}

#[test]
fn braces_inside_strings_do_not_end_the_object() {
    let reply = r#"Sure. {"crisis": false, "indicators": ["said \"}\" oddly"]} trailing"#;
    let screen: Screen = parse_reply(reply).unwrap();
    assert_eq!(screen.indicators, vec!["said \"}\" oddly".to_string()]);
}

#[test]
fn prose_only_is_a_parse_error() {
    let err = parse_reply::<Screen>("I cannot help with that.").unwrap_err();
    assert!(matches!(err, GenerationError::ResponseParse(_)));
    assert!(!err.is_transport());
}

#[test]
fn wrong_shape_is_a_schema_violation() {
    let err = parse_reply::<Screen>(r#"{"crisis": "maybe"}"#).unwrap_err();
    assert!(matches!(err, GenerationError::SchemaViolation(_)));
}

#[test]
fn unterminated_object_is_a_parse_error() {
    let err = parse_reply::<Screen>(r#"{"crisis": true, "indicators": ["#).unwrap_err();
    assert!(matches!(err, GenerationError::ResponseParse(_)));
}
