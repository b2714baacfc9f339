//! Chat-Completions Generator Client
//!
//! HTTP implementation of [`QuizGenerator`] against an OpenAI-compatible
//! chat-completions endpoint. One request per call, no retry; the
//! per-call timeout is baked into the client so a stuck upstream cannot
//! hold a request slot indefinitely.

use serde::{Deserialize, Serialize};

use crate::application::config::TriviaConfig;
use crate::domain::generator::QuizGenerator;
use crate::error::{TriviaError, TriviaResult};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Generator backed by a chat-completions API
pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl ChatCompletionsGenerator {
    /// Build a client from configuration
    pub fn new(config: &TriviaConfig) -> TriviaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.generator_timeout)
            .build()
            .map_err(|e| TriviaError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.generator_url.clone(),
            api_key: config.generator_api_key.clone(),
            model: config.generator_model.clone(),
        })
    }
}

impl QuizGenerator for ChatCompletionsGenerator {
    async fn generate(&self, prompt: &str) -> TriviaResult<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TriviaError::GenerationFailed(format!("Generator request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriviaError::GenerationFailed(format!(
                "Generator returned status {status}"
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            TriviaError::GenerationFailed(format!("Generator response unreadable: {e}"))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                TriviaError::GenerationFailed("Generator response carried no content".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::get_quiz::GetQuizUseCase;

    #[test]
    fn test_client_satisfies_the_orchestrator_bound() {
        let config = Arc::new(TriviaConfig::development());
        let generator = ChatCompletionsGenerator::new(&config).unwrap();
        let _ = GetQuizUseCase::new(Arc::new(generator), config);
    }
}
