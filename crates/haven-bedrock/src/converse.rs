//! [`TextGenerator`] backed by the Bedrock Converse API.
//!
//! System-role messages are joined into the Converse `system` block; user
//! and assistant messages are sent in order. Sampling options map onto the
//! request's `InferenceConfiguration`.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::GenerationError;
use crate::generate::{GenerationRequest, MessageRole, TextGenerator};

pub struct BedrockGenerator {
    client: Client,
    model_id: String,
}

impl BedrockGenerator {
    /// The caller chooses the model (e.g. a Claude Haiku inference profile).
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let call_id = Uuid::new_v4();
        let model_id = self.model_id.as_str();

        let mut system = Vec::new();
        let mut messages = Vec::new();
        for msg in &request.messages {
            let role = match msg.role {
                MessageRole::System => {
                    system.push(SystemContentBlock::Text(msg.content.clone()));
                    continue;
                }
                MessageRole::User => ConversationRole::User,
                MessageRole::Assistant => ConversationRole::Assistant,
            };
            let message = Message::builder()
                .role(role)
                .content(ContentBlock::Text(msg.content.clone()))
                .build()
                .map_err(|e| GenerationError::Invocation(e.to_string()))?;
            messages.push(message);
        }

        if messages.is_empty() {
            return Err(GenerationError::Invocation(
                "request has no user message".to_string(),
            ));
        }

        let inference = InferenceConfiguration::builder()
            .temperature(request.options.temperature)
            .max_tokens(i32::try_from(request.options.max_tokens).unwrap_or(i32::MAX))
            .build();

        info!(call_id = %call_id, model_id, "starting generation");

        let response = self
            .client
            .converse()
            .model_id(model_id)
            .set_system(if system.is_empty() { None } else { Some(system) })
            .set_messages(Some(messages))
            .inference_config(inference)
            .send()
            .await
            .map_err(|e| GenerationError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| GenerationError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if let Some(usage) = response.usage() {
            info!(
                call_id = %call_id,
                model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "generation complete"
            );
        }
        debug!(call_id = %call_id, reply = %text, "raw generation reply");

        Ok(text)
    }
}
