// Quiz generation: prompt contract, reply parser, and the pipeline tying them to the LLM.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod model;
pub mod parser;
pub mod prompts;
