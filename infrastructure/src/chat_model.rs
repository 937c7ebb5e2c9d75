use crate::config::Config;
use crate::openai_client::OpenAiClient;
use domain::ports::Generator;
use domain::prompt::ChatMessage;
use shared::types::Result;

/// Sampling temperature for answers. Fixed, not configurable per call.
pub const CHAT_TEMPERATURE: f32 = 0.0;

/// Chat-completion model used to generate answers.
#[derive(Clone)]
pub struct OpenAiChat {
    client: OpenAiClient,
    model: String,
    temperature: f32,
}

impl OpenAiChat {
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            temperature: CHAT_TEMPERATURE,
        }
    }

    /// Returns `None` when the HTTP client cannot be initialised.
    pub fn from_config(config: &Config) -> Option<Self> {
        match OpenAiClient::from_config(config) {
            Ok(client) => {
                tracing::info!(model = %config.chat_model, "chat model initialized");
                Some(Self::new(client, &config.chat_model))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to initialize chat model client");
                None
            }
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

impl Generator for OpenAiChat {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.client
            .chat_completion(&self.model, messages, self.temperature)
            .await
    }
}
