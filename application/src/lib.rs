pub mod answer_chain;
pub mod rag_service;
