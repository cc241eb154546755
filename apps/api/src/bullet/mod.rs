// Bullet generation: writer → grader → scorer.
// All LLM calls go through llm_client, never directly to OpenAI.

pub mod grader;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod scoring;
pub mod writer;
