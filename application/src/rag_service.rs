use crate::answer_chain::AnswerChain;
use domain::context::assemble_context;
use domain::models::{RagAnswer, TOP_K};
use domain::ports::{Embedder, Generator, Retriever};
use shared::telemetry::Telemetry;
use shared::types::Result;

/// Embed the question, fetch the closest passages, answer from them.
pub struct RagService<E, R, G> {
    embedder: E,
    retriever: R,
    chain: AnswerChain<G>,
}

impl<E, R, G> RagService<E, R, G>
where
    E: Embedder,
    R: Retriever,
    G: Generator,
{
    pub fn new(embedder: E, retriever: R, chain: AnswerChain<G>) -> Self {
        Self {
            embedder,
            retriever,
            chain,
        }
    }

    pub async fn query(&self, question: &str) -> Result<RagAnswer> {
        let timer = Telemetry::new();

        let query_embedding = self.embedder.embed(question).await?;
        let results = self.retriever.search(&query_embedding, TOP_K).await?;
        tracing::info!(
            retrieved = results.len(),
            elapsed_ms = timer.elapsed_ms() as u64,
            "retrieved context documents"
        );

        // An empty context still goes to the model; it is told to decline in that case.
        let context = assemble_context(&results);
        let answer = self.chain.invoke(question, &context).await?;
        tracing::info!(elapsed_ms = timer.elapsed_ms() as u64, "answer generated");

        Ok(RagAnswer {
            question: question.to_string(),
            context,
            answer,
        })
    }
}
