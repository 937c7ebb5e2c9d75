use serde::{Deserialize, Serialize};

/// Fixed number of neighbours requested from the vector store.
pub const TOP_K: usize = 10;

/// A stored passage returned by similarity search. `score` is a similarity: higher is closer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub text: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ScoredDocument {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
            metadata: None,
        }
    }
}

/// Everything one run produced, in the order it was produced.
#[derive(Debug, Clone)]
pub struct RagAnswer {
    pub question: String,
    pub context: String,
    pub answer: String,
}
