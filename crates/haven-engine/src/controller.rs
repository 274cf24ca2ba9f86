//! One conversation's intake, turn by turn.
//!
//! A turn runs: crisis phrase scan → critical yes check → extraction →
//! crisis check → store → advance or complete → reply. State changes only
//! after extraction has succeeded and never across an await, so a failed or
//! abandoned turn leaves the assessment exactly as it was. A critical
//! question never fails for lack of the generation service.

use std::sync::Arc;

use haven_bedrock::generate::TextGenerator;
use haven_core::models::answer::{CrisisScreen, FieldValue, YesNo};
use haven_core::models::assessment::{AssessmentState, CompletionReason};
use haven_core::models::history::ConversationHistoryEntry;
use haven_core::models::phase::Phase;
use haven_core::models::question::{Question, TargetField};
use haven_core::models::turn::{AssessmentSummary, TurnResponse};
use haven_instruments::scoring::score_assessment;
use tracing::{info, instrument, warn};

use crate::config::EngineConfig;
use crate::crisis;
use crate::error::{EngineError, ExtractionError};
use crate::extract::{ResponseExtractor, pattern};
use crate::reply::{self, ChunkSink};
use crate::sequencer;

pub struct ConversationController {
    state: AssessmentState,
    history: Vec<ConversationHistoryEntry>,
    extractor: ResponseExtractor,
    config: EngineConfig,
}

impl ConversationController {
    pub fn new(generator: Arc<dyn TextGenerator>, config: EngineConfig) -> Self {
        let extractor = ResponseExtractor::new(
            generator,
            config.generation_options(),
            config.service_failure_policy,
        );
        Self {
            state: AssessmentState::new(),
            history: Vec::new(),
            extractor,
            config,
        }
    }

    /// Greeting plus the pending question. Logged to history.
    pub fn opening_message(&mut self) -> String {
        let phase = self.state.current_phase;
        let message = match sequencer::current_question(phase) {
            Some(question) => reply::opening(question.prompt),
            None => self.closing_message(),
        };
        self.history
            .push(ConversationHistoryEntry::system(message.clone(), Some(phase)));
        message
    }

    /// Process one parent answer.
    ///
    /// Returns an error only when the generation service could not be
    /// reached; the assessment is then unchanged and the same answer can be
    /// sent again.
    #[instrument(
        skip_all,
        fields(assessment_id = %self.state.id, phase = %self.state.current_phase)
    )]
    pub async fn process_response(
        &mut self,
        raw: &str,
        sink: Option<&mut ChunkSink<'_>>,
    ) -> Result<TurnResponse, EngineError> {
        let Some(question) = sequencer::current_question(self.state.current_phase) else {
            let message = self.closing_message();
            self.deliver(&message, sink).await;
            return Ok(TurnResponse::from_state(&self.state, message));
        };

        let phrases = crisis::matched_phrases(raw);
        if !phrases.is_empty() {
            warn!(?phrases, "crisis phrase in answer");
            let indicators: Vec<String> = phrases.iter().map(|p| p.to_string()).collect();
            let value = self.offline_crisis_value(raw, question, &indicators);
            return self.finish_crisis(raw, question, value, indicators, sink);
        }

        // An affirmative answer to a critical question needs no model call.
        if question.critical && pattern::match_yes_no(raw) == YesNo::Yes {
            warn!("affirmative answer to critical question");
            let indicators = vec![pattern::AFFIRMATIVE_SCREEN.to_string()];
            let value = self.offline_crisis_value(raw, question, &indicators);
            return self.finish_crisis(raw, question, value, indicators, sink);
        }

        let value = match self.extractor.extract(raw, question).await {
            Ok(value) => value,
            Err(ExtractionError::NoAnswer { phase }) => {
                info!("no answer given, asking again");
                let message = reply::reask(question.prompt);
                self.history
                    .push(ConversationHistoryEntry::user(raw, Some(phase)));
                self.history
                    .push(ConversationHistoryEntry::system(message.clone(), Some(phase)));
                self.deliver(&message, sink).await;
                return Ok(TurnResponse::from_state(&self.state, message));
            }
            // A critical question is always answered, with or without the model.
            Err(ExtractionError::Generation(e)) if question.critical => {
                warn!(error = %e, "generation failed on critical question, using fallback");
                match self.extractor.extract_fallback(raw, question) {
                    Some(value) => value,
                    None => return Err(ExtractionError::Generation(e).into()),
                }
            }
            Err(e) => return Err(e.into()),
        };

        if crisis::is_crisis(raw, &value, question) {
            warn!("affirmative crisis screen");
            let indicators = match &value {
                FieldValue::Crisis(screen) if !screen.indicators.is_empty() => {
                    screen.indicators.clone()
                }
                _ => vec![pattern::AFFIRMATIVE_SCREEN.to_string()],
            };
            return self.finish_crisis(raw, question, Some(value), indicators, sink);
        }

        self.state.record(question.target_field, value)?;
        self.history
            .push(ConversationHistoryEntry::user(raw, Some(question.phase)));

        let next = sequencer::advance(question.phase);
        let message = match sequencer::current_question(next) {
            Some(next_question) => {
                self.state.current_phase = next;
                info!(next = %next, progress = self.state.progress(), "answer recorded");
                reply::compose(raw, next_question.prompt)
            }
            None => {
                let message = reply::COMPLETION_MESSAGE.to_string();
                self.finalize(CompletionReason::AllAnswered, message.clone());
                message
            }
        };
        self.history.push(ConversationHistoryEntry::system(
            message.clone(),
            Some(self.state.current_phase).filter(|p| !p.is_terminal()),
        ));

        self.deliver(&message, sink).await;
        Ok(TurnResponse::from_state(&self.state, message))
    }

    /// The question currently waiting for an answer.
    pub fn current_question(&self) -> Option<&'static Question> {
        sequencer::current_question(self.state.current_phase)
    }

    pub fn current_phase(&self) -> Phase {
        self.state.current_phase
    }

    pub fn assessment_summary(&self) -> AssessmentSummary {
        AssessmentSummary::from(&self.state)
    }

    pub fn conversation_history(&self) -> &[ConversationHistoryEntry] {
        &self.history
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// Start over: a new assessment at the first question, empty history.
    pub fn reset(&mut self) {
        info!(assessment_id = %self.state.id, "resetting assessment");
        self.state = AssessmentState::new();
        self.history.clear();
    }

    fn finish_crisis(
        &mut self,
        raw: &str,
        question: &Question,
        value: Option<FieldValue>,
        indicators: Vec<String>,
        sink: Option<&mut ChunkSink<'_>>,
    ) -> Result<TurnResponse, EngineError> {
        if let Some(value) = value {
            self.state.record(question.target_field, value)?;
        }
        self.state.data.crisis_detected = true;
        self.state.data.crisis_indicators = indicators;

        let message = reply::CRISIS_MESSAGE.to_string();
        self.finalize(CompletionReason::CrisisDetected, message.clone());
        self.history
            .push(ConversationHistoryEntry::user(raw, Some(question.phase)));
        self.history
            .push(ConversationHistoryEntry::system(message.clone(), None));

        // The safety message goes out in one piece, without pacing.
        if let Some(sink) = sink {
            sink(&message);
        }
        Ok(TurnResponse::from_state(&self.state, message))
    }

    /// Value stored for the pending question when a crisis ends the turn
    /// before extraction. Model-assisted questions other than the crisis
    /// screen store nothing.
    fn offline_crisis_value(
        &self,
        raw: &str,
        question: &Question,
        indicators: &[String],
    ) -> Option<FieldValue> {
        if question.target_field == TargetField::Crisis {
            Some(FieldValue::Crisis(CrisisScreen {
                flag: true,
                indicators: indicators.to_vec(),
                verbatim: None,
            }))
        } else {
            self.extractor.extract_offline(raw, question)
        }
    }

    fn finalize(&mut self, reason: CompletionReason, message: String) {
        let card = score_assessment(&self.state.data, &self.config.scoring);
        let data = &mut self.state.data;
        data.phq_score = Some(card.phq_score);
        data.gad_score = Some(card.gad_score);
        data.severity = Some(card.severity);
        data.suitability = Some(card.suitability);
        self.state.complete(reason, message);
        info!(
            ?reason,
            phq = card.phq_score,
            gad = card.gad_score,
            severity = ?card.severity,
            suitability = ?card.suitability,
            "assessment complete"
        );
    }

    fn closing_message(&self) -> String {
        self.state
            .closing_message
            .clone()
            .unwrap_or_else(|| reply::COMPLETION_MESSAGE.to_string())
    }

    async fn deliver(&self, message: &str, sink: Option<&mut ChunkSink<'_>>) {
        if let Some(sink) = sink {
            reply::stream(message, sink, self.config.stream_delay()).await;
        }
    }
}

impl std::fmt::Debug for ConversationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationController")
            .field("state", &self.state)
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}
