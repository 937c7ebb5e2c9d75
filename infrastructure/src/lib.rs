pub mod chat_model;
pub mod config;
pub mod embedder;
pub mod openai_client;
pub mod pg_vector_store;
