// Career insights built on top of the scoring engine.
// All model calls go through llm_client::Generator.

pub mod domains;
pub mod prompts;
pub mod summary;
