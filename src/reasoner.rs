//! Chain-of-thought orchestration.
//!
//! Ties the pipeline together: render the prompt, call Azure OpenAI,
//! extract the reasoning chain, and attach metadata. The extraction and
//! analysis primitives themselves live in [`crate::chain`] and stay free
//! of any network concern.

use std::time::Instant;

use tracing::{debug, info};

use crate::azure::{AzureClient, ChatMessage, ChatRequest};
use crate::chain::{extract, ChainMetadata, ReasoningChain};
use crate::config::{Config, ModelConfig};
use crate::error::{AppResult, AzureError, ReasoningError};
use crate::prompts::{cot_prompt, COT_SYSTEM_PROMPT};

/// Orchestrates one reasoning request against an Azure OpenAI deployment.
pub struct ChainOfThoughtReasoner {
    azure: AzureClient,
    model: ModelConfig,
}

impl ChainOfThoughtReasoner {
    /// Create a new reasoner backed by the given client.
    pub fn new(azure: AzureClient, config: &Config) -> Self {
        Self {
            azure,
            model: config.model.clone(),
        }
    }

    /// Generate a chain-of-thought trace for the given question.
    ///
    /// Fails when the question is blank, the model call fails, the
    /// completion is empty, or no valid thought steps could be extracted.
    /// A completion that parses into zero steps is a hard error here even
    /// though extraction itself never fails: an empty chain carries no
    /// usable trace and downstream metadata would be meaningless.
    pub async fn reason(&self, question: &str) -> AppResult<ReasoningChain> {
        if question.trim().is_empty() {
            return Err(ReasoningError::Validation {
                field: "question".to_string(),
                reason: "Question cannot be empty".to_string(),
            }
            .into());
        }

        let start = Instant::now();

        debug!(question_len = question.len(), "Starting reasoning request");

        let messages = vec![
            ChatMessage::system(COT_SYSTEM_PROMPT),
            ChatMessage::user(cot_prompt(question)),
        ];
        let request = ChatRequest::new(messages)
            .with_temperature(self.model.temperature)
            .with_max_tokens(self.model.max_tokens);

        let response = self.azure.chat_completion(request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AzureError::InvalidResponse {
                message: "Response contained no choices".to_string(),
            })?;

        let content = choice.message.content.unwrap_or_default();
        if content.trim().is_empty() {
            return Err(ReasoningError::EmptyCompletion.into());
        }

        let (steps, final_answer) = extract(&content);

        if steps.is_empty() {
            return Err(ReasoningError::NoStepsExtracted.into());
        }

        let metadata =
            ChainMetadata::from_steps(&steps, self.azure.deployment(), choice.finish_reason);

        info!(
            num_steps = steps.len(),
            final_answer_found = !final_answer.is_empty(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Reasoning chain extracted"
        );

        Ok(ReasoningChain {
            question: question.to_string(),
            steps,
            final_answer,
            metadata,
        })
    }
}
