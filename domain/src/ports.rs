use crate::models::ScoredDocument;
use crate::prompt::ChatMessage;
use shared::types::Result;

/// Turns text into a vector using a remote embedding model.
pub trait Embedder {
    fn embed(&self, text: &str) -> impl std::future::Future<Output = Result<Vec<f32>>> + Send;
}

/// Ranked nearest-neighbour lookup. Results come back best match first, at most `k` of them.
pub trait Retriever {
    fn search(
        &self,
        embedding: &[f32],
        k: usize,
    ) -> impl std::future::Future<Output = Result<Vec<ScoredDocument>>> + Send;
}

/// Chat-completion model.
pub trait Generator {
    fn complete(
        &self,
        messages: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
