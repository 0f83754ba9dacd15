use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use futures_util::StreamExt;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::LlmConfig;
use crate::error::{AnalyzerError, Result};

/// Anything that turns a prompt into generated text.
///
/// The pipeline treats every `Err` as empty text, so implementations should
/// report failures rather than invent output.
#[async_trait]
pub trait TextModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String>;
}

/// Generation options applied to each request.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub candidate_count: u8,
    pub max_output_tokens: u32,
    pub stream: bool,
}

impl From<&LlmConfig> for GenerationOptions {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            candidate_count: config.candidate_count,
            max_output_tokens: config.max_output_tokens,
            stream: config.stream,
        }
    }
}

/// OpenAI-compatible chat completion client.
#[derive(Clone)]
pub struct LLMClient {
    pub client: Client<OpenAIConfig>,
    pub model: String,
    pub options: GenerationOptions,
    timeout: Duration,
}

impl LLMClient {
    pub fn new(config: &LlmConfig, timeout_secs: u64) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.api_key.clone().unwrap_or_default());
        if let Some(url) = &config.base_url {
            openai_config = openai_config.with_api_base(url);
        }
        let client = Client::with_config(openai_config);
        Self {
            client,
            model: config.model.clone(),
            options: GenerationOptions::from(config),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn build_request(&self, system_prompt: &str, user_input: &str) -> Result<CreateChatCompletionRequest> {
        #[allow(deprecated)]
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(self.options.temperature)
            .n(self.options.candidate_count)
            .max_tokens(self.options.max_output_tokens)
            .messages([
                ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessageArgs::default()
                        .content(system_prompt)
                        .build()?,
                ),
                ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(user_input)
                        .build()?,
                ),
            ])
            .build()?;
        Ok(request)
    }

    async fn chat(&self, request: CreateChatCompletionRequest) -> Result<String> {
        let response = self.client.chat().create(request).await?;
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }

    /// Concatenate the deltas of the first candidate.
    async fn chat_stream(&self, request: CreateChatCompletionRequest) -> Result<String> {
        let mut stream = self.client.chat().create_stream(request).await?;
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            for choice in chunk.choices.into_iter().filter(|c| c.index == 0) {
                if let Some(delta) = choice.delta.content {
                    text.push_str(&delta);
                }
            }
        }
        Ok(text)
    }
}

#[async_trait]
impl TextModel for LLMClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String> {
        info!("🤖 Sending request to LLM (Model: {}, stream: {})...", self.model, self.options.stream);

        let request = self.build_request(system_prompt, prompt)?;
        let call = async {
            if self.options.stream {
                self.chat_stream(request).await
            } else {
                self.chat(request).await
            }
        };

        let text = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| AnalyzerError::Timeout(self.timeout.as_secs()))??;

        info!("🤖 LLM Response received ({} chars).", text.len());
        debug!("🤖 LLM Response: {}", text);
        Ok(text)
    }
}
