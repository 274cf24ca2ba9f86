#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use haven_bedrock::error::GenerationError;
use haven_bedrock::generate::{GenerationRequest, TextGenerator};
use haven_engine::config::{EngineConfig, ServiceFailurePolicy};
use haven_engine::controller::ConversationController;

/// One queued outcome for the next generation call.
#[derive(Debug, Clone)]
pub enum Scripted {
    Reply(String),
    Unreachable,
}

/// Returns queued replies in order and records every request it receives.
#[derive(Default)]
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push(&self, outcome: Scripted) {
        self.script.lock().unwrap().push_back(outcome);
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn model_id(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Reply(text)) => Ok(text),
            Some(Scripted::Unreachable) => {
                Err(GenerationError::Invocation("connection refused".to_string()))
            }
            None => panic!("generation called with an empty script"),
        }
    }
}

pub fn reply(text: &str) -> Scripted {
    Scripted::Reply(text.to_string())
}

pub fn test_config() -> EngineConfig {
    EngineConfig {
        stream_delay_ms: 0,
        ..EngineConfig::default()
    }
}

pub fn fallback_config() -> EngineConfig {
    EngineConfig {
        service_failure_policy: ServiceFailurePolicy::Fallback,
        ..test_config()
    }
}

pub fn controller(generator: &Arc<ScriptedGenerator>) -> ConversationController {
    ConversationController::new(generator.clone(), test_config())
}

pub const CONCERNS_REPLY: &str = r#"{"summary": "Low mood and school refusal since the autumn.", "issues": ["low mood", "school refusal"]}"#;

pub const DEPRESSION_REPLY: &str = r#"{"interest": "nearly_every_day", "mood": "nearly_every_day", "sleep": "nearly_every_day", "appetite": "nearly_every_day"}"#;

pub const ANXIETY_REPLY: &str = r#"{"nervousness": "nearly_every_day", "worry": "nearly_every_day", "restlessness": "nearly_every_day"}"#;

pub const NO_CRISIS_REPLY: &str = r#"{"crisis": false, "indicators": []}"#;

/// Parent answers for a complete intake with no risk disclosed.
pub const ANSWERS: [&str; 7] = [
    "She's 12",
    "She has been really low and won't go to school.",
    "She's down nearly every day, has lost interest in everything, barely sleeps and hardly eats.",
    "She's on edge all the time, worries constantly and can't relax.",
    "Very much, she has stopped seeing friends.",
    "About 2 months now",
    "No",
];

/// Model replies for the four model-assisted questions in [`ANSWERS`].
pub fn full_script() -> Vec<Scripted> {
    vec![
        reply(CONCERNS_REPLY),
        reply(DEPRESSION_REPLY),
        reply(ANXIETY_REPLY),
        reply(NO_CRISIS_REPLY),
    ]
}
