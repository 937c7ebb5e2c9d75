use crate::models::ScoredDocument;

/// Join retrieved passages into the prompt context, keeping search order.
///
/// Only the text of each document is used; scores never reach the model. No deduplication or
/// truncation happens here, and an empty result set gives an empty context.
pub fn assemble_context(results: &[ScoredDocument]) -> String {
    results
        .iter()
        .map(|doc| doc.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
