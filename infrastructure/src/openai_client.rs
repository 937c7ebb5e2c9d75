use crate::config::Config;
use domain::prompt::ChatMessage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::error::ServiceError;
use shared::telemetry::Telemetry;
use shared::types::Result;
use std::sync::Arc;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

/// Thin client for the OpenAI-compatible `/embeddings` and `/chat/completions` endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.openai_base_url, &config.openai_api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn create_embedding(&self, model: &str, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/embeddings", self.base_url);
        let request = EmbeddingRequest { model, input: text };
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Api {
                service: "embeddings",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }
        let embedding_response: EmbeddingResponse = response.json().await?;
        embedding_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| ServiceError::EmptyResponse { service: "embeddings" }.into())
    }

    pub async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model,
            messages,
            temperature,
        };
        let timer = Telemetry::new();
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Api {
                service: "chat completion",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }
        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            tracing::info!(
                model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                latency_ms = timer.elapsed_ms() as u64,
                "chat completion finished"
            );
        }

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ServiceError::EmptyResponse { service: "chat completion" }.into())
    }
}
