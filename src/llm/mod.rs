use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{ChatCompletionRequestMessage, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use tracing::info;

use crate::config::LlmConfig;
use crate::error::{AdvisorError, AdvisorResult};

/// Seam between the pipeline and the text-generation backend so tests can
/// substitute canned responses for the live API.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_input: &str) -> AdvisorResult<String>;
}

#[derive(Clone)]
pub struct LLMClient {
    client: Client<OpenAIConfig>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl LLMClient {
    pub fn new(config: &LlmConfig) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.api_key.clone().unwrap_or_default());
        if let Some(url) = &config.base_url {
            openai_config = openai_config.with_api_base(url);
        }
        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// Quota exhaustion gets its own error so the caller can point the user at
/// billing instead of showing a generic failure.
fn map_backend_error(err: OpenAIError) -> AdvisorError {
    match err {
        OpenAIError::ApiError(api) => {
            let is_quota = api
                .r#type
                .as_deref()
                .map(|t| t == "insufficient_quota" || t == "rate_limit_error")
                .unwrap_or(false)
                || api.message.contains("quota")
                || api.message.contains("Rate limit");
            if is_quota {
                AdvisorError::QuotaExceeded
            } else {
                AdvisorError::Backend(api.message)
            }
        }
        other => AdvisorError::Backend(other.to_string()),
    }
}

#[async_trait]
impl TextGenerator for LLMClient {
    async fn generate(&self, system_prompt: &str, user_input: &str) -> AdvisorResult<String> {
        info!("🤖 Sending request to LLM (Model: {})...", self.model);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .messages([
                ChatCompletionRequestMessage::System(
                    async_openai::types::ChatCompletionRequestSystemMessageArgs::default()
                        .content(system_prompt)
                        .build()
                        .map_err(map_backend_error)?,
                ),
                ChatCompletionRequestMessage::User(
                    async_openai::types::ChatCompletionRequestUserMessageArgs::default()
                        .content(user_input)
                        .build()
                        .map_err(map_backend_error)?,
                ),
            ])
            .build()
            .map_err(map_backend_error)?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_backend_error)?;

        info!("🤖 LLM Response received.");

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AdvisorError::Backend("empty completion".to_string()))
    }
}
