use haven_bedrock::generate::GenerationOptions;
use haven_instruments::scoring::ScoringPolicy;
use serde::{Deserialize, Serialize};

/// What to do when the generation service cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceFailurePolicy {
    /// Fail the turn and leave the assessment untouched so it can be retried.
    #[default]
    Fail,
    /// Use the deterministic fallback, as for an unusable reply.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sampling temperature for extraction calls. Keep near zero.
    pub temperature: f32,
    /// Output cap for extraction calls.
    pub max_tokens: u32,
    /// Pause between streamed reply segments, in milliseconds.
    pub stream_delay_ms: u64,
    pub service_failure_policy: ServiceFailurePolicy,
    pub scoring: ScoringPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            stream_delay_ms: 30,
            service_failure_policy: ServiceFailurePolicy::default(),
            scoring: ScoringPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn stream_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.stream_delay_ms)
    }
}
