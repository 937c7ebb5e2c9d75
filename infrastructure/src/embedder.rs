use super::openai_client::OpenAiClient;
use crate::config::Config;
use domain::ports::Embedder;
use shared::types::Result;

/// Query embedder backed by the OpenAI embeddings endpoint. One request per call.
#[derive(Clone)]
pub struct OpenAiEmbedder {
    client: OpenAiClient,
    model: String,
}

impl OpenAiEmbedder {
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            OpenAiClient::from_config(config)?,
            &config.embedding_model,
        ))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let vector = self.client.create_embedding(&self.model, text).await?;
        tracing::debug!(model = %self.model, dimensions = vector.len(), "query embedded");
        Ok(vector)
    }
}
