// Generation pipeline: intent validation, prompt construction, upstream call,
// response normalization, fallback degradation.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod artifact;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod intent;
pub mod normalizer;
pub mod prompts;
pub mod request_builder;
