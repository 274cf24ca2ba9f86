use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use haven_bedrock::error::GenerationError;
use haven_bedrock::generate::{GenerationRequest, TextGenerator};
use haven_cli::session::{report, run};
use haven_core::models::assessment::AssessmentData;
use haven_engine::config::EngineConfig;
use haven_engine::controller::ConversationController;
use haven_engine::reply;

struct QueuedReplies(Mutex<VecDeque<&'static str>>);

#[async_trait]
impl TextGenerator for QueuedReplies {
    fn model_id(&self) -> &str {
        "queued"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .map(str::to_string)
            .ok_or_else(|| GenerationError::Invocation("no reply queued".to_string()))
    }
}

fn controller(replies: &[&'static str]) -> ConversationController {
    let generator = Arc::new(QueuedReplies(Mutex::new(replies.iter().copied().collect())));
    let config = EngineConfig {
        stream_delay_ms: 0,
        ..EngineConfig::default()
    };
    ConversationController::new(generator, config)
}

#[tokio::test]
async fn full_session_prints_report() {
    let mut controller = controller(&[
        r#"{"summary": "Trouble at school.", "issues": ["school"]}"#,
        r#"{"interest": "several_days", "mood": "several_days", "sleep": "not_at_all", "appetite": "not_reported"}"#,
        r#"{"nervousness": "nearly_every_day", "worry": "several_days", "restlessness": "not_at_all"}"#,
        r#"{"crisis": false, "indicators": []}"#,
    ]);
    let input = "11\nTrouble at school\nSome low days\nWorries a lot\nsomewhat\na few weeks\nno\n";
    let mut out = Vec::new();

    run(&mut controller, input.as_bytes(), &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(controller.state().is_complete());
    assert!(text.contains(reply::COMPLETION_MESSAGE));
    assert!(text.contains("# Intake summary"));
    assert!(text.contains("Total: 2"));
    assert!(text.contains("Total: 4"));
}

#[tokio::test]
async fn closed_input_stops_without_report() {
    let mut controller = controller(&[]);
    let mut out = Vec::new();

    run(&mut controller, "9\n".as_bytes(), &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(!controller.state().is_complete());
    assert!(!text.contains("# Intake summary"));
}

#[tokio::test]
async fn failed_turn_asks_for_the_answer_again() {
    let mut controller = controller(&[]);
    let mut out = Vec::new();

    run(&mut controller, "9\nHe is angry a lot\n".as_bytes(), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Please send it again"));
    assert!(controller.state().data.concerns.is_none());
}

#[tokio::test]
async fn reset_command_starts_over() {
    let mut controller = controller(&[]);
    let mut out = Vec::new();

    run(&mut controller, "9\n/reset\n".as_bytes(), &mut out)
        .await
        .unwrap();

    assert!(controller.state().data.age.is_none());
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches(reply::GREETING).count(), 2);
}

#[test]
fn report_lists_both_instruments() {
    let text = report(&AssessmentData::default()).unwrap();
    assert!(text.contains("## PHQ-A"));
    assert!(text.contains("## GAD-7"));
    assert!(text.contains("\"completed\": false"));
}
